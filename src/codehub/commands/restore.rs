use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

/// Moves snippets from the recycle bin back to the library.
pub fn run<S: SnippetStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    let resolved = resolve_ids(store, Collection::RecycleBin, ids)?;
    let mut result = CmdResult::default();

    for snippet in resolved {
        let moved = store.move_snippet(&snippet.id, Collection::RecycleBin, Collection::Active)?;
        result.add_message(CmdMessage::success(format!("Restored: {}", moved.title)));
        result.affected_snippets.push(moved);
    }

    Ok(result)
}
