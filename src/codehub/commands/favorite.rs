use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

/// Sets or clears the favorite flag on each snippet.
pub fn set<S: SnippetStore>(
    store: &mut S,
    ids: &[String],
    is_favorite: bool,
) -> Result<CmdResult> {
    let resolved = resolve_ids(store, Collection::Active, ids)?;
    let mut result = CmdResult::default();

    for mut snippet in resolved {
        if snippet.is_favorite == is_favorite {
            result.add_message(CmdMessage::info(format!(
                "Already {}: {}",
                label(is_favorite),
                snippet.title
            )));
            continue;
        }
        snippet.is_favorite = is_favorite;
        store.save_snippet(&snippet, Collection::Active)?;
        result.add_message(CmdMessage::success(format!(
            "{}: {}",
            label(is_favorite),
            snippet.title
        )));
        result.affected_snippets.push(snippet);
    }

    Ok(result)
}

fn label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Favorite"
    } else {
        "Not a favorite"
    }
}
