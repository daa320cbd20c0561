use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

/// Moves snippets to the recycle bin.
pub fn run<S: SnippetStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    let resolved = resolve_ids(store, Collection::Active, ids)?;
    let mut result = CmdResult::default();

    for snippet in resolved {
        let moved = store.move_snippet(&snippet.id, Collection::Active, Collection::RecycleBin)?;
        result.add_message(CmdMessage::success(format!(
            "Moved to recycle bin: {}",
            moved.title
        )));
        result.affected_snippets.push(moved);
    }

    Ok(result)
}
