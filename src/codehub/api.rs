//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! every client (the CLI today, anything else tomorrow).
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*` function
//! - **Applies configuration** (default sort, code search, embed base URL)
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! Business logic lives in `commands/*.rs` and the `view` pipeline; output
//! formatting lives in the CLI. `CodeHubApi<S: SnippetStore>` is generic over
//! storage, so tests run against `InMemoryStore` and the CLI against
//! `FileStore`.

use crate::browser::SnippetBrowser;
use crate::commands;
use crate::config::CodeHubConfig;
use crate::embed::{embed_url, EmbedOptions};
use crate::error::Result;
use crate::format::{ExportFormat, ImportFormat};
use crate::model::{Collection, Snippet};
use crate::store::SnippetStore;
use crate::view::{QueryParams, SearchOptions, ViewState};
use std::path::{Path, PathBuf};

pub struct CodeHubApi<S: SnippetStore> {
    store: S,
    config: CodeHubConfig,
    config_dir: PathBuf,
}

impl<S: SnippetStore> CodeHubApi<S> {
    pub fn new(store: S, config: CodeHubConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &CodeHubConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Search options from config, with an optional override.
    pub fn search_options(&self, include_code: Option<bool>) -> SearchOptions {
        SearchOptions {
            include_code: include_code.unwrap_or(self.config.include_code_in_search),
        }
    }

    /// Initial view state: the configured sort, seeded from query parameters.
    pub fn initial_state(&self, params: &QueryParams) -> ViewState {
        let mut state = ViewState::default().with_sort_order(self.config.default_sort);
        state.apply_params(params);
        state
    }

    /// A browser over `collection` with a loaded snapshot.
    pub fn browser(&self, collection: Collection, params: QueryParams) -> Result<SnippetBrowser> {
        let mut browser = SnippetBrowser::new(collection, params, self.search_options(None))
            .with_sort_order(self.config.default_sort);
        browser.refresh(&self.store)?;
        Ok(browser)
    }

    pub fn list_snippets(
        &self,
        collection: Collection,
        state: &ViewState,
        options: SearchOptions,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, collection, state, options)
    }

    pub fn facets(&self, collection: Collection) -> Result<commands::CmdResult> {
        commands::list::facets(&self.store, collection)
    }

    pub fn view_snippets(
        &self,
        collection: Collection,
        ids: &[String],
    ) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, collection, ids)
    }

    pub fn delete_snippets(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn restore_snippets(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::restore::run(&mut self.store, ids)
    }

    pub fn pin_snippets(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::pinning::pin(&mut self.store, ids)
    }

    pub fn unpin_snippets(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::pinning::unpin(&mut self.store, ids)
    }

    pub fn set_favorite(
        &mut self,
        ids: &[String],
        is_favorite: bool,
    ) -> Result<commands::CmdResult> {
        commands::favorite::set(&mut self.store, ids, is_favorite)
    }

    pub fn edit_snippet(
        &mut self,
        id: &str,
        edit: commands::SnippetEdit,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn duplicate_snippet(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::duplicate::run(&mut self.store, id)
    }

    pub fn purge_snippets<F>(
        &mut self,
        ids: &[String],
        confirm: F,
    ) -> Result<commands::CmdResult>
    where
        F: FnOnce(&[Snippet]) -> bool,
    {
        commands::purge::run(&mut self.store, ids, confirm)
    }

    /// Purges what the recycle bin shows under `state` and `options`, the
    /// same set `list_snippets` returns for them.
    pub fn purge_visible<F>(
        &mut self,
        state: &ViewState,
        options: SearchOptions,
        confirm: F,
    ) -> Result<commands::CmdResult>
    where
        F: FnOnce(&[Snippet]) -> bool,
    {
        let visible = commands::list::run(&self.store, Collection::RecycleBin, state, options)?
            .listed_snippets;
        commands::purge::purge_all(&mut self.store, &visible, confirm)
    }

    pub fn import_snippets(
        &mut self,
        input: &str,
        format: ImportFormat,
    ) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, input, format)
    }

    pub fn export_snippets(
        &self,
        collection: Collection,
        state: &ViewState,
        options: SearchOptions,
        format: ExportFormat,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, collection, state, options, format)
    }

    /// Embed URL for an active snippet, under the configured base URL.
    pub fn embed_url(&self, id: &str, options: &EmbedOptions) -> Result<String> {
        let snippet = commands::helpers::resolve_id(&self.store, Collection::Active, id)?;
        embed_url(&self.config.embed_base_url, &snippet.id, options)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ImportReport, MessageLevel, SnippetEdit};
