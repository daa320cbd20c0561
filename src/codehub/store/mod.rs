//! # Storage Layer
//!
//! Snippets live with an external collaborator (a backend API in the web
//! app). The [`SnippetStore`] trait is the seam: it hands the view pipeline
//! snapshots of a [`Collection`] and carries out the actions the UI triggers.
//! The pipeline treats every call as opaque and never retries.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: no persistence; tests and short-lived sessions.
//! - [`file::FileStore`]: a single JSON library document on disk, used by the
//!   command-line client.

use crate::error::Result;
use crate::model::{Collection, Snippet};

pub mod file;
pub mod memory;

/// Abstract interface over wherever snippets are kept.
pub trait SnippetStore {
    /// Snapshot of every snippet in a collection.
    fn list_snippets(&self, collection: Collection) -> Result<Vec<Snippet>>;

    /// Get a snippet by its exact id.
    fn get_snippet(&self, id: &str, collection: Collection) -> Result<Snippet>;

    /// Create or replace a snippet.
    fn save_snippet(&mut self, snippet: &Snippet, collection: Collection) -> Result<()>;

    /// Move a snippet between collections (soft delete and restore).
    fn move_snippet(&mut self, id: &str, from: Collection, to: Collection) -> Result<Snippet>;

    /// Remove a snippet permanently.
    fn remove_snippet(&mut self, id: &str, collection: Collection) -> Result<()>;
}
