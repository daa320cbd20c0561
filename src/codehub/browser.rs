//! Event-driven shell around the view pipeline.
//!
//! [`SnippetBrowser`] owns what a list screen holds between events: the
//! latest snapshot from the store, the loading flag, the [`ViewState`] and
//! the page's query parameters. Each handler mutates that state and, for
//! category and language changes, rewrites the mirrored parameters. The
//! visible list is never stored; [`SnippetBrowser::view`] recomputes it.

use crate::commands::{purge, CmdResult};
use crate::error::{CodeHubError, Result};
use crate::model::{Collection, Snippet};
use crate::store::SnippetStore;
use crate::view::{compute_view, QueryParams, SearchOptions, SnippetView, SortOrder, ViewState};

#[derive(Debug, Clone)]
pub struct SnippetBrowser {
    collection: Collection,
    snapshot: Vec<Snippet>,
    loading: bool,
    state: ViewState,
    options: SearchOptions,
    params: QueryParams,
}

impl SnippetBrowser {
    /// A browser over `collection`, seeded from the page's query parameters.
    pub fn new(collection: Collection, params: QueryParams, options: SearchOptions) -> Self {
        let state = ViewState::from_params(&params);
        Self {
            collection,
            snapshot: Vec::new(),
            loading: true,
            state,
            options,
            params,
        }
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.state.sort_order = sort_order;
        self
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replaces the snapshot. Any earlier view is superseded.
    pub fn set_snapshot(&mut self, snapshot: Vec<Snippet>) {
        self.snapshot = snapshot;
        self.loading = false;
    }

    /// Pulls a fresh snapshot. On failure the previous snapshot is kept.
    pub fn refresh<S: SnippetStore>(&mut self, store: &S) -> Result<()> {
        self.loading = true;
        match store.list_snippets(self.collection) {
            Ok(snapshot) => {
                self.set_snapshot(snapshot);
                Ok(())
            }
            Err(e) => {
                self.loading = false;
                tracing::warn!(error = %e, collection = ?self.collection, "refresh failed");
                Err(e)
            }
        }
    }

    pub fn view(&self) -> SnippetView<'_> {
        compute_view(&self.snapshot, &self.state, self.options)
    }

    pub fn on_search_change(&mut self, term: &str) {
        self.state.search_term = term.to_string();
    }

    pub fn on_category_toggle(&mut self, category: &str) {
        self.state.toggle_category(category);
        self.state.write_params(&mut self.params);
    }

    pub fn on_language_change(&mut self, language: &str) {
        self.state.set_language(language);
        self.state.write_params(&mut self.params);
    }

    pub fn on_sort_change(&mut self, sort_order: SortOrder) {
        self.state.sort_order = sort_order;
    }

    pub fn on_favorites_toggle(&mut self) {
        self.state.show_favorites = !self.state.show_favorites;
    }

    /// Permanently deletes every snippet currently visible in the recycle
    /// bin, once `confirm` agrees, then refreshes.
    pub fn purge_visible<S, F>(&mut self, store: &mut S, confirm: F) -> Result<CmdResult>
    where
        S: SnippetStore,
        F: FnOnce(&[Snippet]) -> bool,
    {
        if self.collection != Collection::RecycleBin {
            return Err(CodeHubError::Api(
                "Only the recycle bin can be purged".to_string(),
            ));
        }

        let visible = self.view().to_owned_snippets();
        let result = purge::purge_all(store, &visible, confirm)?;
        if !result.affected_snippets.is_empty() {
            self.refresh(store)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::*;
    use crate::store::memory::InMemoryStore;

    fn titles(browser: &SnippetBrowser) -> Vec<String> {
        browser
            .view()
            .snippets
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    fn tagged(title: &str, language: &str, categories: &[&str]) -> Snippet {
        let mut s = snippet(title, language);
        s.categories = categories.iter().map(|c| c.to_string()).collect();
        s
    }

    fn library() -> InMemoryStore {
        StoreFixture::new()
            .with_snippet(tagged("Fetch", "python", &["web", "http"]))
            .with_snippet(tagged("Serve", "rust", &["web"]))
            .with_snippet(tagged("Parse", "python", &["cli"]))
            .store
    }

    #[test]
    fn test_starts_loading_and_seeds_from_params() {
        let params = QueryParams::parse("?categories=web&language=Python&page=2");
        let mut browser = SnippetBrowser::new(Collection::Active, params, SearchOptions::default());
        assert!(browser.is_loading());
        assert!(browser.view().is_empty());

        browser.refresh(&library()).unwrap();
        assert!(!browser.is_loading());
        assert_eq!(titles(&browser), vec!["Fetch"]);
        assert_eq!(browser.view().facets.categories.len(), 3);
    }

    #[test]
    fn test_category_toggle_rewrites_params() {
        let params = QueryParams::parse("page=2");
        let mut browser = SnippetBrowser::new(Collection::Active, params, SearchOptions::default());
        browser.refresh(&library()).unwrap();

        browser.on_category_toggle("web");
        browser.on_category_toggle("http");
        assert_eq!(browser.params().get("categories"), Some("web,http"));
        assert_eq!(titles(&browser), vec!["Fetch"]);

        browser.on_category_toggle("http");
        browser.on_category_toggle("web");
        assert_eq!(browser.params().get("categories"), None);
        assert_eq!(browser.params().get("page"), Some("2"));
        assert_eq!(titles(&browser).len(), 3);
    }

    #[test]
    fn test_language_change_and_clear() {
        let mut browser =
            SnippetBrowser::new(Collection::Active, QueryParams::new(), SearchOptions::default());
        browser.refresh(&library()).unwrap();

        browser.on_language_change("Rust");
        assert_eq!(browser.params().get("language"), Some("Rust"));
        assert_eq!(titles(&browser), vec!["Serve"]);

        browser.on_language_change("");
        assert_eq!(browser.params().get("language"), None);
        assert_eq!(titles(&browser).len(), 3);
    }

    #[test]
    fn test_search_sort_and_favorites_do_not_touch_params() {
        let mut browser =
            SnippetBrowser::new(Collection::Active, QueryParams::new(), SearchOptions::default());
        browser.refresh(&library()).unwrap();

        browser.on_sort_change(SortOrder::AlphaAsc);
        assert_eq!(titles(&browser), vec!["Fetch", "Parse", "Serve"]);

        browser.on_search_change("PARSE");
        assert_eq!(titles(&browser), vec!["Parse"]);

        browser.on_search_change("");
        browser.on_favorites_toggle();
        assert!(browser.view().is_empty());
        assert!(browser.params().is_empty());
    }

    #[test]
    fn test_new_snapshot_supersedes_old() {
        let mut browser =
            SnippetBrowser::new(Collection::Active, QueryParams::new(), SearchOptions::default());
        browser.set_snapshot(vec![snippet("Old", "go")]);
        browser.set_snapshot(vec![snippet("New", "go")]);
        assert_eq!(titles(&browser), vec!["New"]);
    }

    #[test]
    fn test_purge_visible_respects_filters() {
        let mut store = StoreFixture::new()
            .with_deleted("Old go", "go")
            .with_deleted("Old rust", "rust")
            .store;
        let mut browser = SnippetBrowser::new(
            Collection::RecycleBin,
            QueryParams::new(),
            SearchOptions::default(),
        );
        browser.refresh(&store).unwrap();
        browser.on_language_change("Go");

        let result = browser.purge_visible(&mut store, |_| true).unwrap();
        assert_eq!(result.affected_snippets.len(), 1);
        assert_eq!(store.len(Collection::RecycleBin), 1);

        browser.on_language_change("");
        assert_eq!(titles(&browser), vec!["Old rust"]);
    }

    #[test]
    fn test_purge_visible_only_in_recycle_bin() {
        let mut store = library();
        let mut browser =
            SnippetBrowser::new(Collection::Active, QueryParams::new(), SearchOptions::default());
        browser.refresh(&store).unwrap();
        assert!(browser.purge_visible(&mut store, |_| true).is_err());
        assert_eq!(store.len(Collection::Active), 3);
    }
}
