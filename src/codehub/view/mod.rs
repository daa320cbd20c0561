//! # Snippet View Pipeline
//!
//! Turns a snapshot of snippets plus a [`ViewState`] into what a list view
//! renders: the filtered, ordered snippets and the facet menus.
//!
//! ```text
//!   snapshot ──┬──► facets()                       ──► Facets
//!              └──► filter::matches ──► sort_snippets ──► Vec<&Snippet>
//! ```
//!
//! Every pass is a fresh, pure computation over borrowed data. Nothing is
//! cached between passes and input records are never mutated, so a newer
//! snapshot simply replaces the output of an older one.

pub mod facets;
pub mod filter;
pub mod sort;
pub mod state;

pub use facets::{facets, Facets};
pub use filter::matches;
pub use sort::{compare_titles, sort_snippets};
pub use state::{QueryParams, SortOrder, ViewState, CATEGORIES_PARAM, LANGUAGE_PARAM};

use crate::model::Snippet;

/// Search behaviour that comes from configuration rather than the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Also match the search term against raw fragment code.
    pub include_code: bool,
}

/// The rendered result of one pipeline pass.
#[derive(Debug, Clone)]
pub struct SnippetView<'a> {
    pub snippets: Vec<&'a Snippet>,
    pub facets: Facets,
}

impl SnippetView<'_> {
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Owned copies of the visible snippets.
    pub fn to_owned_snippets(&self) -> Vec<Snippet> {
        self.snippets.iter().map(|s| (*s).clone()).collect()
    }
}

/// Filters and orders `snippets` according to `state`.
pub fn filter_and_sort<'a>(
    snippets: &'a [Snippet],
    state: &ViewState,
    options: SearchOptions,
) -> Vec<&'a Snippet> {
    let mut visible: Vec<&Snippet> = snippets
        .iter()
        .filter(|snippet| matches(snippet, state, options))
        .collect();
    sort_snippets(&mut visible, state.sort_order);
    visible
}

/// Runs the whole pipeline: visible snippets plus filter-independent facets.
pub fn compute_view<'a>(
    snippets: &'a [Snippet],
    state: &ViewState,
    options: SearchOptions,
) -> SnippetView<'a> {
    let visible = filter_and_sort(snippets, state, options);
    tracing::debug!(
        total = snippets.len(),
        visible = visible.len(),
        sort = %state.sort_order,
        "computed snippet view"
    );

    SnippetView {
        snippets: visible,
        facets: facets(snippets),
    }
}
