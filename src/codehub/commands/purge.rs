use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Collection, Snippet};
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

/// Permanently removes specific snippets from the recycle bin.
pub fn run<S, F>(store: &mut S, ids: &[String], confirm: F) -> Result<CmdResult>
where
    S: SnippetStore,
    F: FnOnce(&[Snippet]) -> bool,
{
    let targets = resolve_ids(store, Collection::RecycleBin, ids)?;
    purge(store, targets, confirm)
}

/// Permanently removes every snippet in `visible`, the recycle-bin view as
/// currently filtered. Nothing happens when it is empty or not confirmed.
pub fn purge_all<S, F>(store: &mut S, visible: &[Snippet], confirm: F) -> Result<CmdResult>
where
    S: SnippetStore,
    F: FnOnce(&[Snippet]) -> bool,
{
    purge(store, visible.to_vec(), confirm)
}

fn purge<S, F>(store: &mut S, targets: Vec<Snippet>, confirm: F) -> Result<CmdResult>
where
    S: SnippetStore,
    F: FnOnce(&[Snippet]) -> bool,
{
    let mut result = CmdResult::default();
    if targets.is_empty() {
        let message = if store.list_snippets(Collection::RecycleBin)?.is_empty() {
            "Recycle bin is empty."
        } else {
            "No snippets match."
        };
        result.add_message(CmdMessage::info(message));
        return Ok(result);
    }

    // Stale targets fail the whole purge before anything is removed.
    for snippet in &targets {
        store.get_snippet(&snippet.id, Collection::RecycleBin)?;
    }

    if !confirm(&targets) {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    for snippet in targets {
        if let Err(e) = store.remove_snippet(&snippet.id, Collection::RecycleBin) {
            tracing::warn!(id = %snippet.id, error = %e, "purge stopped");
            result.add_message(CmdMessage::error(format!(
                "Failed to purge {}: {}",
                snippet.title, e
            )));
            break;
        }
        result.add_message(CmdMessage::success(format!("Purged: {}", snippet.title)));
        result.affected_snippets.push(snippet);
    }
    tracing::info!(count = result.affected_snippets.len(), "purged snippets");

    Ok(result)
}
