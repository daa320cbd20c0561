use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeHubError {
    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Snippet id \"{0}\" is ambiguous: {1} snippets match")]
    AmbiguousId(String, usize),

    #[error("Invalid snippet: {0}")]
    InvalidSnippet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CodeHubError>;
