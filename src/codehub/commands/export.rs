use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::archive::write_archive;
use crate::format::markdown::to_markdown;
use crate::format::{ExportDocument, ExportFormat};
use crate::model::{Collection, Snippet};
use crate::store::SnippetStore;
use crate::view::{filter_and_sort, SearchOptions, ViewState};

/// Exports the snippets currently visible under `state`, in view order.
pub fn run<S: SnippetStore>(
    store: &S,
    collection: Collection,
    state: &ViewState,
    options: SearchOptions,
    format: ExportFormat,
) -> Result<CmdResult> {
    let snapshot = store.list_snippets(collection)?;
    let visible: Vec<Snippet> = filter_and_sort(&snapshot, state, options)
        .into_iter()
        .cloned()
        .collect();

    let bytes = render(&visible, format)?;

    let mut result = CmdResult::default();
    if visible.is_empty() {
        result.add_message(CmdMessage::warning("No snippets to export."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} snippet(s) as {}",
        visible.len(),
        format
    )));
    Ok(result.with_affected_snippets(visible).with_exported(bytes))
}

pub fn render(snippets: &[Snippet], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(ExportDocument::new(snippets.to_vec())
            .to_json_pretty()?
            .into_bytes()),
        ExportFormat::Markdown => Ok(to_markdown(snippets)?.into_bytes()),
        ExportFormat::Archive => {
            let mut buf = Vec::new();
            write_archive(&mut buf, snippets)?;
            Ok(buf)
        }
    }
}
