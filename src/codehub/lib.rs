//! # CodeHub Architecture
//!
//! CodeHub is a **UI-agnostic code-snippet library**. The command-line client
//! in `cli/` is one consumer; a web front end would be another. Everything a
//! snippet list screen needs (filtering, ordering, facet menus, shareable
//! query state) lives here as plain Rust.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) and Browser (browser.rs)                │
//! │  - Thin facade over commands, applies configuration         │
//! │  - Event handlers that drive the view pipeline              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) and View Pipeline (view/)    │
//! │  - Actions on snippets, import and export                   │
//! │  - Pure filter / sort / facet computation                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore trait                                       │
//! │  - FileStore (CLI), InMemoryStore (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout or stderr, never exits
//! the process and never assumes a terminal. Diagnostics go through
//! `tracing`; the binary decides where they end up.
//!
//! ## Testing
//!
//! Commands and the view pipeline carry most unit tests, run against
//! `InMemoryStore` and its fixtures. The API tests check dispatch and
//! configuration. The CLI is covered end to end in `tests/cli.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`browser`]: Stateful list screen: snapshot, loading flag, handlers
//! - [`view`]: Filter, sort, facets and query-parameter state
//! - [`commands`]: Business logic for each action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Snippet`, `Fragment`, `Collection`)
//! - [`language`]: Language label normalization
//! - [`format`]: JSON, Markdown and archive formats
//! - [`embed`]: Embed URL construction
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod browser;
pub mod commands;
pub mod config;
pub mod embed;
pub mod error;
pub mod format;
pub mod language;
pub mod model;
pub mod store;
pub mod view;
