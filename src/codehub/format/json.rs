use crate::error::{CodeHubError, Result};
use crate::model::{flag, normalize_categories, nullable_string, Fragment, Snippet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

/// The JSON export document. The CLI's library file uses the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recycle_bin: Vec<Snippet>,
}

impl ExportDocument {
    pub fn new(snippets: Vec<Snippet>) -> Self {
        Self {
            version: FORMAT_VERSION,
            exported_at: Utc::now(),
            snippets,
            recycle_bin: Vec::new(),
        }
    }

    pub fn with_recycle_bin(mut self, recycle_bin: Vec<Snippet>) -> Self {
        self.recycle_bin = recycle_bin;
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// An import item that has been read but not yet validated.
///
/// Ids are never taken from the payload: every imported snippet is a new
/// snippet. A missing `updated_at` defaults to the import time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SnippetDraft {
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default)]
    pub fragments: Vec<Fragment>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, with = "flag")]
    pub is_pinned: bool,
    #[serde(default, with = "flag")]
    pub is_favorite: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl SnippetDraft {
    /// Validates the draft and turns it into a snippet with a fresh id.
    pub fn into_snippet(self, now: DateTime<Utc>) -> Result<Snippet> {
        let snippet = Snippet {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description,
            fragments: self.fragments,
            categories: normalize_categories(self.categories),
            is_pinned: self.is_pinned,
            is_favorite: self.is_favorite,
            updated_at: self.updated_at.unwrap_or(now),
            created_at: self.created_at.or(Some(now)),
            expiry_date: self.expiry_date,
        };
        snippet.validate()?;
        Ok(snippet)
    }
}

/// An import item that could not even be read as a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedItem {
    pub title: Option<String>,
    pub reason: String,
}

/// Splits a JSON import payload into per-item results.
///
/// The payload is either a bare array of snippets or an [`ExportDocument`].
/// A payload that is not JSON, or has neither shape, fails as a whole; a
/// single unreadable item only fails its own entry.
pub fn parse_import(input: &str) -> Result<Vec<std::result::Result<SnippetDraft, RejectedItem>>> {
    let value: Value = serde_json::from_str(input)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut doc) => match doc.remove("snippets") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(CodeHubError::Import(
                    "document has no \"snippets\" array".into(),
                ))
            }
        },
        _ => {
            return Err(CodeHubError::Import(
                "expected an array of snippets or an export document".into(),
            ))
        }
    };

    Ok(items.into_iter().map(parse_item).collect())
}

fn parse_item(item: Value) -> std::result::Result<SnippetDraft, RejectedItem> {
    let title = item
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string);
    serde_json::from_value(item).map_err(|e| RejectedItem {
        title,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let input = r#"[
            {"title": "One", "fragments": [{"file_name": "a.rs", "language": "rust", "code": "x"}]},
            {"title": "Two", "fragments": []}
        ]"#;
        let items = parse_import(input).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap().title, "One");
        assert!(items[1].as_ref().unwrap().fragments.is_empty());
    }

    #[test]
    fn test_parse_export_document() {
        let doc = ExportDocument::new(vec![Snippet::new(
            "Exported",
            vec![Fragment::new("a.py", "python", "pass")],
        )]);
        let items = parse_import(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(items.len(), 1);
        let draft = items.into_iter().next().unwrap().unwrap();
        assert_eq!(draft.title, "Exported");
        assert!(draft.updated_at.is_some());
    }

    #[test]
    fn test_unreadable_item_keeps_title() {
        let input = r#"[{"title": "Broken", "fragments": "nope"}]"#;
        let items = parse_import(input).unwrap();
        let rejected = items[0].as_ref().unwrap_err();
        assert_eq!(rejected.title.as_deref(), Some("Broken"));
        assert!(!rejected.reason.is_empty());
    }

    #[test]
    fn test_wrong_top_level_shape_fails() {
        assert!(matches!(parse_import("42"), Err(CodeHubError::Import(_))));
        assert!(matches!(
            parse_import(r#"{"items": []}"#),
            Err(CodeHubError::Import(_))
        ));
        assert!(matches!(
            parse_import("not json"),
            Err(CodeHubError::Serialization(_))
        ));
    }

    #[test]
    fn test_into_snippet_assigns_fresh_id_and_defaults() {
        let now = Utc::now();
        let draft = SnippetDraft {
            title: "  Padded  ".into(),
            fragments: vec![Fragment::new("x.sh", "sh", "echo")],
            ..Default::default()
        };
        let snippet = draft.clone().into_snippet(now).unwrap();
        let again = draft.into_snippet(now).unwrap();
        assert_eq!(snippet.title, "Padded");
        assert_eq!(snippet.updated_at, now);
        assert_ne!(snippet.id, again.id);
    }

    #[test]
    fn test_into_snippet_validates() {
        let draft = SnippetDraft {
            title: "No fragments".into(),
            ..Default::default()
        };
        assert!(matches!(
            draft.into_snippet(Utc::now()),
            Err(CodeHubError::InvalidSnippet(_))
        ));
    }
}
