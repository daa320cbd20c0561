use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;
use chrono::Utc;
use uuid::Uuid;

use super::helpers::resolve_id;

const COPY_SUFFIX: &str = " (copy)";

pub fn run<S: SnippetStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let original = resolve_id(store, Collection::Active, id)?;

    let now = Utc::now();
    let mut copy = original.clone();
    copy.id = Uuid::new_v4().to_string();
    copy.title = format!("{}{}", original.title, COPY_SUFFIX);
    copy.is_pinned = false;
    copy.is_favorite = false;
    copy.updated_at = now;
    copy.created_at = Some(now);

    store.save_snippet(&copy, Collection::Active)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Duplicated as: {}", copy.title)));
    result.affected_snippets.push(copy);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::*;

    #[test]
    fn test_duplicate_is_a_fresh_unflagged_snippet() {
        let mut store = StoreFixture::new().with_pinned("Orig", 3).store;
        let result = run(&mut store, "id-orig").unwrap();
        let copy = &result.affected_snippets[0];

        assert_ne!(copy.id, "id-orig");
        assert_eq!(copy.title, "Orig (copy)");
        assert!(!copy.is_pinned);
        assert!(copy.updated_at > day(3));
        assert_eq!(store.len(Collection::Active), 2);

        let original = store.get_snippet("id-orig", Collection::Active).unwrap();
        assert!(original.is_pinned);
        assert_eq!(copy.fragments, original.fragments);
    }
}
