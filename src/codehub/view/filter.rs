use super::state::ViewState;
use super::SearchOptions;
use crate::model::Snippet;

/// Returns true when `snippet` passes every active filter in `state`.
///
/// Filters combine with AND: favorites, text search, language, categories.
/// Any filter left at its empty value accepts everything.
pub fn matches(snippet: &Snippet, state: &ViewState, options: SearchOptions) -> bool {
    if state.show_favorites && !snippet.is_favorite {
        return false;
    }

    matches_search(snippet, &state.search_term.to_lowercase(), options)
        && matches_language(snippet, state.selected_language.as_deref())
        && matches_categories(snippet, &state.selected_categories)
}

/// Case-insensitive substring search over title, description, fragment file
/// names and language labels, plus raw code when enabled.
fn matches_search(snippet: &Snippet, term_lower: &str, options: SearchOptions) -> bool {
    // An empty term matches everything, even with code search on.
    if term_lower.is_empty() {
        return true;
    }

    if snippet.title.to_lowercase().contains(term_lower)
        || snippet.description.to_lowercase().contains(term_lower)
    {
        return true;
    }

    snippet.fragments.iter().any(|fragment| {
        fragment.file_name.to_lowercase().contains(term_lower)
            || fragment.language_label().to_lowercase().contains(term_lower)
            || (options.include_code && fragment.code.to_lowercase().contains(term_lower))
    })
}

fn matches_language(snippet: &Snippet, selected: Option<&str>) -> bool {
    let selected = match selected {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return true,
    };

    snippet
        .fragments
        .iter()
        .any(|fragment| fragment.language_label().to_lowercase() == selected)
}

fn matches_categories(snippet: &Snippet, required: &[String]) -> bool {
    required.iter().all(|category| snippet.has_category(category))
}
