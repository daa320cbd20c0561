//! Embed links for showing a snippet on another page.

use crate::error::{CodeHubError, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedTheme {
    Light,
    Dark,
    #[default]
    System,
}

impl EmbedTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedTheme::Light => "light",
            EmbedTheme::Dark => "dark",
            EmbedTheme::System => "system",
        }
    }
}

impl fmt::Display for EmbedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbedTheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(EmbedTheme::Light),
            "dark" => Ok(EmbedTheme::Dark),
            "system" => Ok(EmbedTheme::System),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    pub show_title: bool,
    pub show_description: bool,
    pub show_file_headers: bool,
    pub show_powered_by: bool,
    pub theme: EmbedTheme,
    /// Show only this fragment (zero-based).
    pub fragment_index: Option<usize>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            show_title: true,
            show_description: true,
            show_file_headers: true,
            show_powered_by: true,
            theme: EmbedTheme::default(),
            fragment_index: None,
        }
    }
}

/// Builds `<base>/embed/<id>?...`, writing only non-default options.
pub fn embed_url(base: &str, id: &str, options: &EmbedOptions) -> Result<String> {
    let mut url = Url::parse(base)
        .map_err(|e| CodeHubError::Config(format!("Invalid embed base URL {}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| CodeHubError::Config(format!("Embed base URL cannot be a base: {}", base)))?
        .pop_if_empty()
        .push("embed")
        .push(id);

    let defaults = EmbedOptions::default();
    let mut pairs: Vec<(&str, String)> = Vec::new();
    for (key, value, default) in [
        ("showTitle", options.show_title, defaults.show_title),
        ("showDescription", options.show_description, defaults.show_description),
        ("showFileHeaders", options.show_file_headers, defaults.show_file_headers),
        ("showPoweredBy", options.show_powered_by, defaults.show_powered_by),
    ] {
        if value != default {
            pairs.push((key, value.to_string()));
        }
    }
    if options.theme != defaults.theme {
        pairs.push(("theme", options.theme.to_string()));
    }
    if let Some(index) = options.fragment_index {
        pairs.push(("fragmentIndex", index.to_string()));
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_no_query() {
        let url = embed_url("https://codehub.app", "abc", &EmbedOptions::default()).unwrap();
        assert_eq!(url, "https://codehub.app/embed/abc");

        let url = embed_url("https://example.com/hub/", "abc", &EmbedOptions::default()).unwrap();
        assert_eq!(url, "https://example.com/hub/embed/abc");
    }

    #[test]
    fn test_non_default_options_are_written() {
        let options = EmbedOptions {
            show_title: false,
            show_powered_by: false,
            theme: EmbedTheme::Dark,
            fragment_index: Some(2),
            ..Default::default()
        };
        let url = embed_url("https://codehub.app", "abc", &options).unwrap();
        assert_eq!(
            url,
            "https://codehub.app/embed/abc?showTitle=false&showPoweredBy=false&theme=dark&fragmentIndex=2"
        );
    }

    #[test]
    fn test_id_is_path_encoded() {
        let url = embed_url("https://codehub.app", "a/b c", &EmbedOptions::default()).unwrap();
        assert_eq!(url, "https://codehub.app/embed/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base() {
        assert!(embed_url("not a url", "abc", &EmbedOptions::default()).is_err());
        assert!(embed_url("mailto:me@example.com", "abc", &EmbedOptions::default()).is_err());
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<EmbedTheme>(), Ok(EmbedTheme::Dark));
        assert!("neon".parse::<EmbedTheme>().is_err());
    }
}
