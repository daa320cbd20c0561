use crate::error::{CodeHubError, Result};
use crate::model::{Collection, Snippet};
use crate::store::SnippetStore;

/// Resolves a user-supplied id: an exact id, or a prefix matching exactly one.
pub fn resolve_id<S: SnippetStore>(
    store: &S,
    collection: Collection,
    needle: &str,
) -> Result<Snippet> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Err(CodeHubError::SnippetNotFound(needle.to_string()));
    }

    let snippets = store.list_snippets(collection)?;
    if let Some(exact) = snippets.iter().find(|s| s.id == needle) {
        return Ok(exact.clone());
    }

    let mut matching: Vec<Snippet> = snippets
        .into_iter()
        .filter(|s| s.id.starts_with(needle))
        .collect();
    match matching.len() {
        0 => Err(CodeHubError::SnippetNotFound(needle.to_string())),
        1 => Ok(matching.remove(0)),
        n => Err(CodeHubError::AmbiguousId(needle.to_string(), n)),
    }
}

pub fn resolve_ids<S: SnippetStore>(
    store: &S,
    collection: Collection,
    needles: &[String],
) -> Result<Vec<Snippet>> {
    needles
        .iter()
        .map(|needle| resolve_id(store, collection, needle))
        .collect()
}
