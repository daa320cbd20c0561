use crate::error::{CodeHubError, Result};
use crate::language::language_label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Which collection of snippets an operation targets.
///
/// The recycle bin holds soft-deleted snippets; it is browsed with the same
/// view pipeline as the active collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    Active,
    RecycleBin,
}

/// One named, language-tagged block of code within a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub file_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub language: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub code: String,
}

impl Fragment {
    pub fn new(
        file_name: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            language: language.into(),
            code: code.into(),
        }
    }

    /// Display label of this fragment's language.
    pub fn language_label(&self) -> String {
        language_label(&self.language)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    pub fragments: Vec<Fragment>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, with = "flag")]
    pub is_pinned: bool,
    #[serde(default, with = "flag")]
    pub is_favorite: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Snippet {
    pub fn new(title: impl Into<String>, fragments: Vec<Fragment>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            fragments,
            categories: Vec::new(),
            is_pinned: false,
            is_favorite: false,
            updated_at: now,
            created_at: Some(now),
            expiry_date: None,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Checks the invariants every stored snippet must hold.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CodeHubError::InvalidSnippet("title is required".into()));
        }
        if self.fragments.is_empty() {
            return Err(CodeHubError::InvalidSnippet(format!(
                "\"{}\" has no fragments",
                self.title
            )));
        }
        if let Some(pos) = self
            .fragments
            .iter()
            .position(|f| f.file_name.trim().is_empty())
        {
            return Err(CodeHubError::InvalidSnippet(format!(
                "fragment {} of \"{}\" has no file name",
                pos + 1,
                self.title
            )));
        }
        Ok(())
    }
}

/// Trims category tags and drops empty and repeated ones, keeping the
/// first occurrence of each.
pub fn normalize_categories(categories: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    categories
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && seen.insert(c.clone()))
        .collect()
}

pub(crate) fn nullable_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Boolean flags travel as `0`/`1`. Reading also accepts JSON booleans.
pub(crate) mod flag {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(b),
            Raw::Int(0) => Ok(false),
            Raw::Int(1) => Ok(true),
            Raw::Int(n) => Err(D::Error::custom(format!("flag must be 0 or 1, got {}", n))),
        }
    }
}
