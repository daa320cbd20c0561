//! Wire formats for moving snippets in and out of a library.
//!
//! - [`json`]: the export document, and lenient per-item parsing of imports
//! - [`markdown`]: human-readable export that imports back
//! - [`archive`]: a `.tar.gz` with every fragment as a file

pub mod archive;
pub mod json;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

pub use json::{ExportDocument, SnippetDraft, FORMAT_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
    Archive,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Archive => "tar.gz",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "archive" | "tar.gz" | "tgz" => Ok(ExportFormat::Archive),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Archive => "archive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportFormat {
    #[default]
    Json,
    Markdown,
}

impl ImportFormat {
    /// Guesses the format from a file name, defaulting to JSON.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".md") || lower.ends_with(".markdown") {
            ImportFormat::Markdown
        } else {
            ImportFormat::Json
        }
    }
}

impl FromStr for ImportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ImportFormat::Json),
            "markdown" | "md" => Ok(ImportFormat::Markdown),
            other => Err(format!("Unknown import format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("md".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert_eq!("TGZ".parse::<ExportFormat>(), Ok(ExportFormat::Archive));
        assert!("yaml".parse::<ExportFormat>().is_err());
        assert_eq!("markdown".parse::<ImportFormat>(), Ok(ImportFormat::Markdown));
        assert!("archive".parse::<ImportFormat>().is_err());
    }

    #[test]
    fn test_import_format_from_file_name() {
        assert_eq!(ImportFormat::from_file_name("notes.MD"), ImportFormat::Markdown);
        assert_eq!(ImportFormat::from_file_name("dump.json"), ImportFormat::Json);
        assert_eq!(ImportFormat::from_file_name("dump"), ImportFormat::Json);
    }
}
