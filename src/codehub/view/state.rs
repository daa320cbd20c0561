//! Filter/sort state and its URL query-parameter mirror.
//!
//! The query string is a serialization target, never a second source of
//! truth: [`ViewState::from_params`] seeds state once on mount, and
//! [`ViewState::write_params`] rewrites the mirrored keys after each
//! category or language change. Parameters the view does not own are left
//! alone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

pub const CATEGORIES_PARAM: &str = "categories";
pub const LANGUAGE_PARAM: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    AlphaAsc,
    AlphaDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::AlphaAsc => "alpha-asc",
            SortOrder::AlphaDesc => "alpha-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "alpha-asc" => Ok(SortOrder::AlphaAsc),
            "alpha-desc" => Ok(SortOrder::AlphaDesc),
            other => Err(format!(
                "Invalid sort order: {} (expected newest, oldest, alpha-asc or alpha-desc)",
                other
            )),
        }
    }
}

/// Ordered query parameters, as found after the `?` of a shareable link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`, replacing it in place if present. `None` or an
    /// empty value removes the key entirely.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                if let Some(pos) = self.pairs.iter().position(|(k, _)| k == key) {
                    self.pairs[pos].1 = value.to_string();
                    let mut seen = false;
                    self.pairs.retain(|(k, _)| {
                        if k != key {
                            return true;
                        }
                        let keep = !seen;
                        seen = true;
                        keep
                    });
                } else {
                    self.pairs.push((key.to_string(), value.to_string()));
                }
            }
            None => self.pairs.retain(|(k, _)| k != key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// User-controlled filter and sort state of a snippet list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub selected_language: Option<String>,
    /// Required categories, in selection order. Matching is conjunctive.
    pub selected_categories: Vec<String>,
    pub sort_order: SortOrder,
    pub show_favorites: bool,
}

impl ViewState {
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds the initial state from query parameters.
    ///
    /// Only `categories` (comma separated) and `language` are read. Values are
    /// not checked against the available facets; an unknown value simply
    /// matches nothing.
    pub fn from_params(params: &QueryParams) -> Self {
        let mut state = Self::default();
        state.apply_params(params);
        state
    }

    /// Seeds category and language selection from whichever parameters are
    /// present, leaving the rest of the state untouched.
    pub fn apply_params(&mut self, params: &QueryParams) {
        if let Some(raw) = params.get(CATEGORIES_PARAM) {
            self.selected_categories = Vec::new();
            for category in raw.split(',').filter(|c| !c.is_empty()) {
                if !self.selected_categories.iter().any(|c| c == category) {
                    self.selected_categories.push(category.to_string());
                }
            }
        }
        if let Some(language) = params.get(LANGUAGE_PARAM) {
            self.set_language(language);
        }
    }

    /// The parameters mirrored from this state, and nothing else.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.write_params(&mut params);
        params
    }

    /// Rewrites the mirrored keys of `params`, dropping them when empty.
    pub fn write_params(&self, params: &mut QueryParams) {
        let categories = self.selected_categories.join(",");
        params.set(CATEGORIES_PARAM, Some(&categories));
        params.set(LANGUAGE_PARAM, self.selected_language.as_deref());
    }

    /// Adds the category if absent, removes it if present.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == category) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(category.to_string());
        }
    }

    /// Selects a language. An empty string clears the selection.
    pub fn set_language(&mut self, language: &str) {
        self.selected_language = if language.is_empty() {
            None
        } else {
            Some(language.to_string())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse_and_display() {
        for order in [
            SortOrder::Newest,
            SortOrder::Oldest,
            SortOrder::AlphaAsc,
            SortOrder::AlphaDesc,
        ] {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
        assert!("alphabetical".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default(), SortOrder::Newest);
    }

    #[test]
    fn test_from_params_seeds_categories_and_language() {
        let params = QueryParams::parse("?categories=web%2Capi&language=Python&page=2");
        let state = ViewState::from_params(&params);
        assert_eq!(state.selected_categories, vec!["web", "api"]);
        assert_eq!(state.selected_language.as_deref(), Some("Python"));
        assert_eq!(state.search_term, "");
        assert_eq!(state.sort_order, SortOrder::Newest);
    }

    #[test]
    fn test_from_params_ignores_empty_entries() {
        let state = ViewState::from_params(&QueryParams::parse("categories=a,,b,a&language="));
        assert_eq!(state.selected_categories, vec!["a", "b"]);
        assert_eq!(state.selected_language, None);
    }

    #[test]
    fn test_empty_state_writes_no_params() {
        assert!(ViewState::default().to_params().is_empty());
    }

    #[test]
    fn test_toggle_category_twice_restores_params() {
        let mut params = QueryParams::parse("categories=web&tab=all");
        let mut state = ViewState::from_params(&params);
        let original_state = state.clone();
        let original_params = params.clone();

        state.toggle_category("cli");
        state.write_params(&mut params);
        assert_eq!(params.get(CATEGORIES_PARAM), Some("web,cli"));

        state.toggle_category("cli");
        state.write_params(&mut params);
        assert_eq!(state, original_state);
        assert_eq!(params, original_params);
    }

    #[test]
    fn test_last_category_removal_drops_param() {
        let mut params = QueryParams::new();
        let mut state = ViewState::default();

        state.toggle_category("web");
        state.write_params(&mut params);
        assert_eq!(params.to_query_string(), "categories=web");

        state.toggle_category("web");
        state.write_params(&mut params);
        assert_eq!(params.get(CATEGORIES_PARAM), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_language_param_roundtrip() {
        let mut params = QueryParams::parse("q=1");
        let mut state = ViewState::default();

        state.set_language("C++");
        state.write_params(&mut params);
        assert_eq!(params.to_query_string(), "q=1&language=C%2B%2B");

        let reparsed = ViewState::from_params(&QueryParams::parse(&params.to_query_string()));
        assert_eq!(reparsed.selected_language.as_deref(), Some("C++"));

        state.set_language("");
        state.write_params(&mut params);
        assert_eq!(params.to_query_string(), "q=1");
    }

    #[test]
    fn test_set_replaces_in_place_and_dedupes() {
        let mut params = QueryParams::parse("language=a&x=1&language=b");
        params.set(LANGUAGE_PARAM, Some("Go"));
        assert_eq!(params.to_query_string(), "language=Go&x=1");
    }
}
