use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

pub fn pin<S: SnippetStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    pin_state(store, ids, true)
}

pub fn unpin<S: SnippetStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    pin_state(store, ids, false)
}

// Only the flag changes; updated_at is left alone so pin order stays put.
fn pin_state<S: SnippetStore>(
    store: &mut S,
    ids: &[String],
    is_pinned: bool,
) -> Result<CmdResult> {
    let resolved = resolve_ids(store, Collection::Active, ids)?;
    let mut result = CmdResult::default();

    for mut snippet in resolved {
        snippet.is_pinned = is_pinned;
        store.save_snippet(&snippet, Collection::Active)?;

        let verb = if is_pinned { "pinned" } else { "unpinned" };
        result.add_message(CmdMessage::success(format!(
            "Snippet {}: {}",
            verb, snippet.title
        )));
        result.affected_snippets.push(snippet);
    }

    Ok(result)
}
