use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::json::{parse_import, RejectedItem};
use crate::format::markdown::parse_markdown;
use crate::format::{ImportFormat, SnippetDraft};
use crate::model::{Collection, Snippet};
use crate::store::SnippetStore;
use chrono::Utc;

/// Why one import item was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    /// Zero-based position in the payload.
    pub index: usize,
    pub title: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub imported: Vec<Snippet>,
    pub failures: Vec<ImportFailure>,
}

/// Imports every valid item of `input` into the active collection.
///
/// Items are handled one at a time; a bad item is recorded and skipped.
/// Only an unreadable payload fails the whole call.
pub fn run<S: SnippetStore>(store: &mut S, input: &str, format: ImportFormat) -> Result<CmdResult> {
    let items: Vec<std::result::Result<SnippetDraft, RejectedItem>> = match format {
        ImportFormat::Json => parse_import(input)?,
        ImportFormat::Markdown => parse_markdown(input).into_iter().map(Ok).collect(),
    };

    let now = Utc::now();
    let mut report = ImportReport::default();

    for (index, item) in items.into_iter().enumerate() {
        let outcome = item
            .map_err(|rejected| (rejected.title, rejected.reason))
            .and_then(|draft| {
                let title = Some(draft.title.clone()).filter(|t| !t.trim().is_empty());
                draft
                    .into_snippet(now)
                    .and_then(|snippet| {
                        store.save_snippet(&snippet, Collection::Active)?;
                        Ok(snippet)
                    })
                    .map_err(|e| (title, e.to_string()))
            });

        match outcome {
            Ok(snippet) => report.imported.push(snippet),
            Err((title, reason)) => {
                tracing::warn!(index, title = ?title, %reason, "skipped import item");
                report.failures.push(ImportFailure {
                    index,
                    title,
                    reason,
                });
            }
        }
    }

    tracing::info!(
        imported = report.imported.len(),
        failed = report.failures.len(),
        "import finished"
    );

    let mut result = CmdResult::default();
    for failure in &report.failures {
        result.add_message(CmdMessage::warning(format!(
            "Item {} ({}): {}",
            failure.index + 1,
            failure.title.as_deref().unwrap_or("untitled"),
            failure.reason
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Imported {} snippet(s), {} failed",
        report.imported.len(),
        report.failures.len()
    )));

    Ok(result
        .with_affected_snippets(report.imported.clone())
        .with_import_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_bad_items_are_reported_and_good_ones_kept() {
        let mut store = InMemoryStore::new();
        let input = r#"[
            {"title": "Good", "fragments": [{"file_name": "a.rs", "language": "rust", "code": "x"}]},
            {"title": "No fragments", "fragments": []},
            {"title": "Bad shape", "fragments": 7},
            {"title": "", "fragments": [{"file_name": "b.rs", "language": "rust", "code": "y"}]},
            {"title": "Also good", "fragments": [{"file_name": "c.py", "language": null, "code": null}]}
        ]"#;

        let result = run(&mut store, input, ImportFormat::Json).unwrap();
        let report = result.import_report.unwrap();

        let imported: Vec<_> = report.imported.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(imported, vec!["Good", "Also good"]);
        assert_eq!(store.len(Collection::Active), 2);

        let failed: Vec<_> = report.failures.iter().map(|f| f.index).collect();
        assert_eq!(failed, vec![1, 2, 3]);
        assert_eq!(report.failures[0].title.as_deref(), Some("No fragments"));
        assert_eq!(report.failures[1].title.as_deref(), Some("Bad shape"));
        assert_eq!(report.failures[2].title, None);
    }

    #[test]
    fn test_malformed_payload_fails_whole_import() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, "[{", ImportFormat::Json).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_markdown_import() {
        let mut store = InMemoryStore::new();
        let md = "# Greeting\n\nSays hi.\n\nCategories: demo\n\n## hi.py\n\n```python\nprint('hi')\n```\n";
        let result = run(&mut store, md, ImportFormat::Markdown).unwrap();
        assert_eq!(result.affected_snippets.len(), 1);

        let saved = &store.list_snippets(Collection::Active).unwrap()[0];
        assert_eq!(saved.title, "Greeting");
        assert_eq!(saved.categories, vec!["demo".to_string()]);
        assert_eq!(saved.fragments[0].code, "print('hi')");
    }
}
