use super::state::SortOrder;
use crate::model::Snippet;
use feruca::Collator;
use std::cell::RefCell;
use std::cmp::Ordering;

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Orders snippets for display, in place.
///
/// Pinned snippets always come first, most recently updated first, whatever
/// `order` says. Only the unpinned snippets follow `order`. The sort is
/// stable, so equal keys keep their input order.
pub fn sort_snippets(snippets: &mut [&Snippet], order: SortOrder) {
    snippets.sort_by(|a, b| compare(a, b, order));
}

fn compare(a: &Snippet, b: &Snippet, order: SortOrder) -> Ordering {
    match (a.is_pinned, b.is_pinned) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b.updated_at.cmp(&a.updated_at),
        (false, false) => match order {
            SortOrder::Newest => b.updated_at.cmp(&a.updated_at),
            SortOrder::Oldest => a.updated_at.cmp(&b.updated_at),
            SortOrder::AlphaAsc => compare_titles(&a.title, &b.title),
            SortOrder::AlphaDesc => compare_titles(&b.title, &a.title),
        },
    }
}

/// Locale-aware title comparison (Unicode Collation Algorithm, root locale).
///
/// Accents and case only break ties between otherwise equal letters, so
/// `"apple" < "Apple" < "banana"` and `"Éclair" < "fig" < "Zebra"`.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
