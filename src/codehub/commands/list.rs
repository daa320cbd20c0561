use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;
use crate::view::{compute_view, SearchOptions, ViewState};

pub fn run<S: SnippetStore>(
    store: &S,
    collection: Collection,
    state: &ViewState,
    options: SearchOptions,
) -> Result<CmdResult> {
    let snapshot = store.list_snippets(collection)?;
    let view = compute_view(&snapshot, state, options);
    let listed = view.to_owned_snippets();

    Ok(CmdResult::default()
        .with_listed_snippets(listed)
        .with_facets(view.facets))
}

/// Facet menus for a collection, independent of any filter.
pub fn facets<S: SnippetStore>(store: &S, collection: Collection) -> Result<CmdResult> {
    let snapshot = store.list_snippets(collection)?;
    Ok(CmdResult::default().with_facets(crate::view::facets(&snapshot)))
}
