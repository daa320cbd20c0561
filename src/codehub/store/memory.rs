use super::SnippetStore;
use crate::error::{CodeHubError, Result};
use crate::model::{Collection, Snippet};
use std::collections::BTreeMap;

/// In-memory storage for tests and the CLI's working copy.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    snippets: BTreeMap<(Collection, String), Snippet>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `active` and `recycle_bin` snippets.
    pub fn from_snippets(active: Vec<Snippet>, recycle_bin: Vec<Snippet>) -> Self {
        let mut store = Self::new();
        for snippet in active {
            store
                .snippets
                .insert((Collection::Active, snippet.id.clone()), snippet);
        }
        for snippet in recycle_bin {
            store
                .snippets
                .insert((Collection::RecycleBin, snippet.id.clone()), snippet);
        }
        store
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.snippets
            .keys()
            .filter(|(c, _)| *c == collection)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl SnippetStore for InMemoryStore {
    fn list_snippets(&self, collection: Collection) -> Result<Vec<Snippet>> {
        Ok(self
            .snippets
            .iter()
            .filter(|((c, _), _)| *c == collection)
            .map(|(_, s)| s.clone())
            .collect())
    }

    fn get_snippet(&self, id: &str, collection: Collection) -> Result<Snippet> {
        self.snippets
            .get(&(collection, id.to_string()))
            .cloned()
            .ok_or_else(|| CodeHubError::SnippetNotFound(id.to_string()))
    }

    fn save_snippet(&mut self, snippet: &Snippet, collection: Collection) -> Result<()> {
        self.snippets
            .insert((collection, snippet.id.clone()), snippet.clone());
        Ok(())
    }

    fn move_snippet(&mut self, id: &str, from: Collection, to: Collection) -> Result<Snippet> {
        let snippet = self
            .snippets
            .remove(&(from, id.to_string()))
            .ok_or_else(|| CodeHubError::SnippetNotFound(id.to_string()))?;
        self.snippets.insert((to, id.to_string()), snippet.clone());
        Ok(snippet)
    }

    fn remove_snippet(&mut self, id: &str, collection: Collection) -> Result<()> {
        if self.snippets.remove(&(collection, id.to_string())).is_none() {
            return Err(CodeHubError::SnippetNotFound(id.to_string()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Fragment;
    use chrono::{DateTime, TimeZone, Utc};

    pub fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, n, 12, 0, 0).unwrap()
    }

    pub fn snippet(title: &str, language: &str) -> Snippet {
        let file_name = format!("{}.txt", title.to_lowercase().replace(' ', "_"));
        let mut s = Snippet::new(title, vec![Fragment::new(file_name, language, "code")]);
        s.id = format!("id-{}", title.to_lowercase().replace(' ', "-"));
        s.updated_at = day(1);
        s
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippet(mut self, snippet: Snippet) -> Self {
            self.store.save_snippet(&snippet, Collection::Active).unwrap();
            self
        }

        pub fn with_active(self, title: &str, language: &str) -> Self {
            self.with_snippet(snippet(title, language))
        }

        pub fn with_pinned(self, title: &str, updated_day: u32) -> Self {
            let mut s = snippet(title, "rust");
            s.is_pinned = true;
            s.updated_at = day(updated_day);
            self.with_snippet(s)
        }

        pub fn with_deleted(mut self, title: &str, language: &str) -> Self {
            let s = snippet(title, language);
            self.store.save_snippet(&s, Collection::RecycleBin).unwrap();
            self
        }
    }
}
