use crate::config::CodeHubConfig;
use crate::model::Snippet;
use crate::view::Facets;

pub mod config;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod favorite;
pub mod helpers;
pub mod import;
pub mod list;
pub mod pinning;
pub mod purge;
pub mod restore;
pub mod view;

pub use edit::SnippetEdit;
pub use import::{ImportFailure, ImportReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_snippets: Vec<Snippet>,
    pub listed_snippets: Vec<Snippet>,
    pub facets: Option<Facets>,
    pub config: Option<CodeHubConfig>,
    pub exported: Option<Vec<u8>>,
    pub import_report: Option<ImportReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_config(mut self, config: CodeHubConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_exported(mut self, bytes: Vec<u8>) -> Self {
        self.exported = Some(bytes);
        self
    }

    pub fn with_import_report(mut self, report: ImportReport) -> Self {
        self.import_report = Some(report);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
