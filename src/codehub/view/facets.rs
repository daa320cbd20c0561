use crate::model::Snippet;
use serde::Serialize;
use std::collections::BTreeSet;

/// Filter menus derived from a snippet collection.
///
/// Facets depend only on the collection, never on the current filters, so
/// the menus stay stable while the user narrows the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct fragment language labels, sorted.
    pub languages: Vec<String>,
    /// Distinct category tags, sorted.
    pub categories: Vec<String>,
}

pub fn facets(snippets: &[Snippet]) -> Facets {
    let mut languages = BTreeSet::new();
    let mut categories = BTreeSet::new();

    for snippet in snippets {
        for fragment in &snippet.fragments {
            languages.insert(fragment.language_label());
        }
        for category in &snippet.categories {
            categories.insert(category.clone());
        }
    }

    Facets {
        languages: languages.into_iter().collect(),
        categories: categories.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fragment;

    #[test]
    fn test_facets_are_distinct_sorted_and_normalized() {
        let mut a = Snippet::new(
            "A",
            vec![
                Fragment::new("a.py", "py", ""),
                Fragment::new("b.py", "python", ""),
            ],
        );
        a.categories = vec!["web".into(), "api".into()];
        let mut b = Snippet::new(
            "B",
            vec![Fragment::new("c.rs", "rust", ""), Fragment::new("d", "", "")],
        );
        b.categories = vec!["api".into(), "Web".into()];

        let result = facets(&[a, b]);
        assert_eq!(result.languages, ["Plain Text", "Python", "Rust"]);
        assert_eq!(result.categories, ["Web", "api", "web"]);
    }

    #[test]
    fn test_facets_of_empty_collection() {
        assert_eq!(facets(&[]), Facets::default());
    }
}
