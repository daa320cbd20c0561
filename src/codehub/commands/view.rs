use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Collection;
use crate::store::SnippetStore;

use super::helpers::resolve_ids;

pub fn run<S: SnippetStore>(
    store: &S,
    collection: Collection,
    ids: &[String],
) -> Result<CmdResult> {
    let snippets = resolve_ids(store, collection, ids)?;
    Ok(CmdResult::default().with_listed_snippets(snippets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::*;

    #[test]
    fn test_views_by_prefix() {
        let store = StoreFixture::new().with_active("Hello", "rust").store;
        let result = run(&store, Collection::Active, &["id-he".to_string()]).unwrap();
        assert_eq!(result.listed_snippets[0].title, "Hello");
    }
}
