use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{normalize_categories, Collection, Fragment};
use crate::store::SnippetStore;
use chrono::Utc;

use super::helpers::resolve_id;

/// Replacement values for an edit. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct SnippetEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fragments: Option<Vec<Fragment>>,
    pub categories: Option<Vec<String>>,
}

impl SnippetEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.fragments.is_none()
            && self.categories.is_none()
    }
}

pub fn run<S: SnippetStore>(store: &mut S, id: &str, edit: SnippetEdit) -> Result<CmdResult> {
    let mut snippet = resolve_id(store, Collection::Active, id)?;
    let mut result = CmdResult::default();

    if edit.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    if let Some(title) = edit.title {
        snippet.title = title.trim().to_string();
    }
    if let Some(description) = edit.description {
        snippet.description = description;
    }
    if let Some(fragments) = edit.fragments {
        snippet.fragments = fragments;
    }
    if let Some(categories) = edit.categories {
        snippet.categories = normalize_categories(categories);
    }
    snippet.validate()?;
    snippet.updated_at = Utc::now();

    store.save_snippet(&snippet, Collection::Active)?;
    result.add_message(CmdMessage::success(format!("Snippet updated: {}", snippet.title)));
    result.affected_snippets.push(snippet);
    Ok(result)
}
