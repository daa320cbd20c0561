//! Language label normalization.
//!
//! Fragments carry whatever language identifier the editor or importer gave
//! them (`py`, `python`, `Python`, `c++`, ...). Everything that shows a
//! language to the user, and everything that filters or searches by one, goes
//! through [`language_label`] so raw identifiers and display labels never
//! drift apart.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Label used for fragments with no language at all.
pub const PLAIN_TEXT: &str = "Plain Text";

static LANGUAGE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("rust", "Rust"),
        ("rs", "Rust"),
        ("javascript", "JavaScript"),
        ("js", "JavaScript"),
        ("jsx", "JavaScript"),
        ("mjs", "JavaScript"),
        ("typescript", "TypeScript"),
        ("ts", "TypeScript"),
        ("tsx", "TypeScript"),
        ("python", "Python"),
        ("py", "Python"),
        ("go", "Go"),
        ("golang", "Go"),
        ("java", "Java"),
        ("c", "C"),
        ("h", "C"),
        ("cpp", "C++"),
        ("c++", "C++"),
        ("cc", "C++"),
        ("cxx", "C++"),
        ("hpp", "C++"),
        ("csharp", "C#"),
        ("c#", "C#"),
        ("cs", "C#"),
        ("php", "PHP"),
        ("ruby", "Ruby"),
        ("rb", "Ruby"),
        ("swift", "Swift"),
        ("kotlin", "Kotlin"),
        ("kt", "Kotlin"),
        ("dart", "Dart"),
        ("html", "HTML"),
        ("htm", "HTML"),
        ("css", "CSS"),
        ("scss", "SCSS"),
        ("sql", "SQL"),
        ("bash", "Bash"),
        ("sh", "Bash"),
        ("shell", "Bash"),
        ("zsh", "Bash"),
        ("powershell", "PowerShell"),
        ("ps1", "PowerShell"),
        ("yaml", "YAML"),
        ("yml", "YAML"),
        ("json", "JSON"),
        ("xml", "XML"),
        ("markdown", "Markdown"),
        ("md", "Markdown"),
        ("dockerfile", "Dockerfile"),
        ("docker", "Dockerfile"),
        ("toml", "TOML"),
        ("ini", "INI"),
        ("lua", "Lua"),
        ("haskell", "Haskell"),
        ("hs", "Haskell"),
        ("elixir", "Elixir"),
        ("ex", "Elixir"),
        ("scala", "Scala"),
        ("r", "R"),
        ("text", PLAIN_TEXT),
        ("txt", PLAIN_TEXT),
        ("plaintext", PLAIN_TEXT),
        ("plain text", PLAIN_TEXT),
    ]
    .into_iter()
    .collect()
});

/// File extensions mapped to the raw identifier stored on a fragment.
static EXTENSION_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("rs", "rust"),
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("mjs", "javascript"),
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("py", "python"),
        ("go", "go"),
        ("java", "java"),
        ("c", "c"),
        ("h", "c"),
        ("cpp", "cpp"),
        ("cc", "cpp"),
        ("cxx", "cpp"),
        ("hpp", "cpp"),
        ("cs", "csharp"),
        ("php", "php"),
        ("rb", "ruby"),
        ("swift", "swift"),
        ("kt", "kotlin"),
        ("dart", "dart"),
        ("html", "html"),
        ("htm", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("sql", "sql"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("ps1", "powershell"),
        ("yml", "yaml"),
        ("yaml", "yaml"),
        ("json", "json"),
        ("xml", "xml"),
        ("md", "markdown"),
        ("toml", "toml"),
        ("ini", "ini"),
        ("lua", "lua"),
        ("hs", "haskell"),
        ("ex", "elixir"),
        ("scala", "scala"),
        ("txt", "plaintext"),
    ]
    .into_iter()
    .collect()
});

/// Maps a raw language identifier to its display label.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Unknown
/// identifiers come back trimmed but otherwise unchanged, and an empty
/// identifier is [`PLAIN_TEXT`]. Labels map to themselves, so the function is
/// idempotent.
pub fn language_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PLAIN_TEXT.to_string();
    }

    match LANGUAGE_LABELS.get(trimmed.to_lowercase().as_str()) {
        Some(label) => (*label).to_string(),
        None => trimmed.to_string(),
    }
}

/// Infers a raw language identifier from a file name's extension.
///
/// `Dockerfile` is recognized by name since it has no extension.
pub fn language_for_file_name(file_name: &str) -> Option<&'static str> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    if base.eq_ignore_ascii_case("dockerfile") {
        return Some("dockerfile");
    }

    let (_, ext) = base.rsplit_once('.')?;
    EXTENSION_LANGUAGES
        .get(ext.to_lowercase().as_str())
        .copied()
}
