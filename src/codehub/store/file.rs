use super::memory::InMemoryStore;
use super::SnippetStore;
use crate::error::Result;
use crate::format::ExportDocument;
use crate::model::{Collection, Snippet};
use std::fs;
use std::path::{Path, PathBuf};

/// A library kept as one JSON document on disk.
///
/// The whole document is loaded on open and rewritten after every mutation.
pub struct FileStore {
    path: PathBuf,
    memory: InMemoryStore,
}

impl FileStore {
    /// Opens the library at `path`. A missing file is an empty library.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let memory = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let doc = ExportDocument::from_json(&content)?;
            InMemoryStore::from_snippets(doc.snippets, doc.recycle_bin)
        } else {
            InMemoryStore::new()
        };
        tracing::debug!(path = %path.display(), "opened library");
        Ok(Self { path, memory })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let doc = ExportDocument::new(self.memory.list_snippets(Collection::Active)?)
            .with_recycle_bin(self.memory.list_snippets(Collection::RecycleBin)?);
        fs::write(&self.path, doc.to_json_pretty()?)?;
        Ok(())
    }
}

impl SnippetStore for FileStore {
    fn list_snippets(&self, collection: Collection) -> Result<Vec<Snippet>> {
        self.memory.list_snippets(collection)
    }

    fn get_snippet(&self, id: &str, collection: Collection) -> Result<Snippet> {
        self.memory.get_snippet(id, collection)
    }

    fn save_snippet(&mut self, snippet: &Snippet, collection: Collection) -> Result<()> {
        self.memory.save_snippet(snippet, collection)?;
        self.persist()
    }

    fn move_snippet(&mut self, id: &str, from: Collection, to: Collection) -> Result<Snippet> {
        let snippet = self.memory.move_snippet(id, from, to)?;
        self.persist()?;
        Ok(snippet)
    }

    fn remove_snippet(&mut self, id: &str, collection: Collection) -> Result<()> {
        self.memory.remove_snippet(id, collection)?;
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeHubError;
    use crate::model::Fragment;
    use tempfile::tempdir;

    fn sample(title: &str) -> Snippet {
        Snippet::new(title, vec![Fragment::new("a.rs", "rust", "fn main() {}")])
    }

    #[test]
    fn test_missing_file_is_empty_library() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("library.json")).unwrap();
        assert!(store.list_snippets(Collection::Active).unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_mutations_persist_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("library.json");

        let kept = sample("Kept");
        let binned = sample("Binned");
        {
            let mut store = FileStore::open(&path).unwrap();
            store.save_snippet(&kept, Collection::Active).unwrap();
            store.save_snippet(&binned, Collection::Active).unwrap();
            store
                .move_snippet(&binned.id, Collection::Active, Collection::RecycleBin)
                .unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        let active = store.list_snippets(Collection::Active).unwrap();
        assert_eq!(active, vec![kept]);
        assert_eq!(
            store
                .get_snippet(&binned.id, Collection::RecycleBin)
                .unwrap()
                .title,
            "Binned"
        );
    }

    #[test]
    fn test_corrupt_library_fails_to_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FileStore::open(&path),
            Err(CodeHubError::Serialization(_))
        ));
    }
}
