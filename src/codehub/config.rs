use crate::error::{CodeHubError, Result};
use crate::view::SortOrder;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const LIBRARY_FILENAME: &str = "library.json";
pub const DEFAULT_EMBED_BASE: &str = "https://codehub.app";

/// Environment variable overriding the config/data directory.
pub const HOME_ENV: &str = "CODEHUB_HOME";

/// Keys accepted by [`CodeHubConfig::get`] and [`CodeHubConfig::set`].
pub const CONFIG_KEYS: [&str; 4] = ["sort", "include-code", "embed-base", "library"];

/// Configuration for codehub, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeHubConfig {
    /// Sort order used when none is given.
    #[serde(default)]
    pub default_sort: SortOrder,

    /// Whether search also looks inside fragment code.
    #[serde(default)]
    pub include_code_in_search: bool,

    /// Library file; relative paths resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_file: Option<PathBuf>,

    #[serde(default = "default_embed_base")]
    pub embed_base_url: String,
}

fn default_embed_base() -> String {
    DEFAULT_EMBED_BASE.to_string()
}

impl Default for CodeHubConfig {
    fn default() -> Self {
        Self {
            default_sort: SortOrder::default(),
            include_code_in_search: false,
            library_file: None,
            embed_base_url: default_embed_base(),
        }
    }
}

impl CodeHubConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sort" => Some(self.default_sort.to_string()),
            "include-code" => Some(self.include_code_in_search.to_string()),
            "embed-base" => Some(self.embed_base_url.clone()),
            "library" => Some(
                self.library_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sort" => {
                self.default_sort = value.parse().map_err(CodeHubError::Config)?;
            }
            "include-code" => {
                self.include_code_in_search = parse_bool(value)?;
            }
            "embed-base" => {
                url::Url::parse(value)
                    .map_err(|e| CodeHubError::Config(format!("Invalid URL {}: {}", value, e)))?;
                self.embed_base_url = value.trim_end_matches('/').to_string();
            }
            "library" => {
                self.library_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => {
                return Err(CodeHubError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// The library file: the configured one, else `library.json` in `config_dir`.
    pub fn library_path(&self, config_dir: &Path) -> PathBuf {
        match &self.library_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => config_dir.join(path),
            None => config_dir.join(LIBRARY_FILENAME),
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(CodeHubError::Config(format!(
            "Expected true or false, got: {}",
            value
        ))),
    }
}

/// `$CODEHUB_HOME` when set, else the platform data directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("dev", "codehub", "codehub")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CodeHubError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = CodeHubConfig::load(dir.path()).unwrap();
        assert_eq!(config, CodeHubConfig::default());
        assert_eq!(config.embed_base_url, DEFAULT_EMBED_BASE);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut config = CodeHubConfig::default();
        config.set("sort", "alpha-desc").unwrap();
        config.set("include-code", "yes").unwrap();
        config.save(&nested).unwrap();

        let loaded = CodeHubConfig::load(&nested).unwrap();
        assert_eq!(loaded.default_sort, SortOrder::AlphaDesc);
        assert!(loaded.include_code_in_search);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"include_code_in_search": true}"#)
            .unwrap();
        let config = CodeHubConfig::load(dir.path()).unwrap();
        assert!(config.include_code_in_search);
        assert_eq!(config.default_sort, SortOrder::Newest);
        assert_eq!(config.embed_base_url, DEFAULT_EMBED_BASE);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CodeHubConfig::default();
        assert!(config.set("sort", "sideways").is_err());
        assert!(config.set("include-code", "maybe").is_err());
        assert!(config.set("embed-base", "not a url").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, CodeHubConfig::default());
    }

    #[test]
    fn test_get_reflects_set() {
        let mut config = CodeHubConfig::default();
        config.set("embed-base", "https://snips.example.com/").unwrap();
        assert_eq!(
            config.get("embed-base").as_deref(),
            Some("https://snips.example.com")
        );
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_library_path_resolution() {
        let base = Path::new("/home/me/.codehub");
        let mut config = CodeHubConfig::default();
        assert_eq!(config.library_path(base), base.join("library.json"));

        config.set("library", "work.json").unwrap();
        assert_eq!(config.library_path(base), base.join("work.json"));

        config.set("library", "/srv/shared.json").unwrap();
        assert_eq!(config.library_path(base), PathBuf::from("/srv/shared.json"));
    }
}
