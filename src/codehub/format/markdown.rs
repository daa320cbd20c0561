//! Markdown export and import.
//!
//! Layout of one snippet:
//!
//! ````text
//! # Title
//!
//! Free-text description, any number of paragraphs.
//!
//! Categories: web, http
//!
//! ## fetch.py
//!
//! ```python
//! import requests
//! ```
//! ````
//!
//! Import is the inverse: each `#` heading opens a snippet, each `##`
//! heading names the next fenced block. Content before the first `#` is
//! ignored.

use super::json::SnippetDraft;
use crate::error::{CodeHubError, Result};
use crate::language::language_for_file_name;
use crate::model::{Fragment, Snippet};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Parser, Tag, TagEnd};

const CATEGORIES_PREFIX: &str = "Categories:";

/// Characters escaped wherever they appear in title, description and
/// category text.
const INLINE_SPECIALS: &str = "\\`*_[]<>#!|~&";

/// Renders snippets as a single Markdown document.
///
/// Text is escaped so that import reads back exactly what was exported. The
/// categories line is written whenever the last description paragraph would
/// otherwise be mistaken for one.
pub fn to_markdown(snippets: &[Snippet]) -> Result<String> {
    let mut events: Vec<Event<'_>> = Vec::new();

    for snippet in snippets {
        push_heading(&mut events, HeadingLevel::H1, &snippet.title);

        let paragraphs: Vec<&str> = snippet
            .description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        for paragraph in &paragraphs {
            push_paragraph(&mut events, paragraph);
        }

        let shadowed = paragraphs
            .last()
            .is_some_and(|p| p.starts_with(CATEGORIES_PREFIX));
        if !snippet.categories.is_empty() || shadowed {
            let line = format!("{} {}", CATEGORIES_PREFIX, snippet.categories.join(", "));
            push_paragraph(&mut events, line.trim_end());
        }

        for fragment in &snippet.fragments {
            push_heading(&mut events, HeadingLevel::H2, &fragment.file_name);

            let mut code = fragment.code.clone();
            if !code.ends_with('\n') {
                code.push('\n');
            }
            events.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(
                CowStr::from(fragment.language.clone()),
            ))));
            events.push(Event::Text(CowStr::from(code)));
            events.push(Event::End(TagEnd::CodeBlock));
        }
    }

    let mut output = String::new();
    pulldown_cmark_to_cmark::cmark(events.iter(), &mut output)
        .map_err(|e| CodeHubError::Api(format!("Markdown rendering failed: {}", e)))?;
    output.push('\n');
    Ok(output)
}

fn push_heading(events: &mut Vec<Event<'_>>, level: HeadingLevel, text: &str) {
    events.push(Event::Start(Tag::Heading {
        level,
        id: None,
        classes: Vec::new(),
        attrs: Vec::new(),
    }));
    push_escaped(events, text);
    events.push(Event::End(TagEnd::Heading(level)));
}

fn push_paragraph(events: &mut Vec<Event<'_>>, text: &str) {
    events.push(Event::Start(Tag::Paragraph));
    push_escaped(events, text);
    events.push(Event::End(TagEnd::Paragraph));
}

// The renderer only escapes a leading special character, so fully escaped
// text goes out as raw inline content.
fn push_escaped(events: &mut Vec<Event<'_>>, text: &str) {
    events.push(Event::InlineHtml(CowStr::from(escape_text(text))));
}

/// Backslash-escapes inline markup everywhere and block markers
/// (`-`, `+`, `=`, `1.`) at the start of each line.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let body = line.trim_start();
        out.push_str(&line[..line.len() - body.len()]);

        let digits = body.chars().take_while(char::is_ascii_digit).count();
        let list_marker = match body[digits..].chars().next() {
            Some('.') | Some(')') if digits > 0 => Some(digits),
            Some('-') | Some('+') | Some('=') if digits == 0 => Some(0),
            _ => None,
        };

        for (pos, c) in body.char_indices() {
            if INLINE_SPECIALS.contains(c) || list_marker == Some(pos) {
                out.push('\\');
            }
            out.push(c);
        }
    }

    out
}

enum Capture {
    None,
    Heading(HeadingLevel),
    Paragraph,
    Code(String),
}

/// A snippet being read. Paragraphs between the title and the first file
/// heading are held back until that heading, because only the last of them
/// may be the categories line.
struct OpenDraft {
    draft: SnippetDraft,
    header_paragraphs: Vec<String>,
    header_closed: bool,
}

impl OpenDraft {
    fn new(title: String) -> Self {
        Self {
            draft: SnippetDraft {
                title,
                ..Default::default()
            },
            header_paragraphs: Vec::new(),
            header_closed: false,
        }
    }

    fn push_paragraph(&mut self, text: String) {
        if self.header_closed {
            append_description(&mut self.draft, &text);
        } else {
            self.header_paragraphs.push(text);
        }
    }

    fn close_header(&mut self) {
        if self.header_closed {
            return;
        }
        self.header_closed = true;

        let mut paragraphs = std::mem::take(&mut self.header_paragraphs);
        let categories = paragraphs
            .last()
            .and_then(|p| p.strip_prefix(CATEGORIES_PREFIX))
            .map(parse_categories);
        if let Some(categories) = categories {
            self.draft.categories = categories;
            paragraphs.pop();
        }
        for paragraph in &paragraphs {
            append_description(&mut self.draft, paragraph);
        }
    }

    fn finish(mut self) -> SnippetDraft {
        self.close_header();
        self.draft
    }
}

/// Reads snippet drafts back out of a Markdown document.
///
/// Inline code, emphasis and strong emphasis keep their delimiters, so
/// hand-written markup survives as text.
pub fn parse_markdown(input: &str) -> Vec<SnippetDraft> {
    let mut drafts: Vec<SnippetDraft> = Vec::new();
    let mut current: Option<OpenDraft> = None;
    let mut pending_file_name: Option<String> = None;
    let mut capture = Capture::None;
    let mut buffer = String::new();

    for event in Parser::new(input) {
        let capturing = !matches!(capture, Capture::None);
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                capture = Capture::Heading(level);
                buffer.clear();
            }
            Event::Start(Tag::Paragraph) => {
                if !capturing {
                    capture = Capture::Paragraph;
                    buffer.clear();
                }
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                capture = Capture::Code(info);
                buffer.clear();
            }
            Event::Text(text) if capturing => buffer.push_str(&text),
            Event::Code(text) if capturing => push_inline_code(&mut buffer, &text),
            Event::Start(Tag::Emphasis) | Event::End(TagEnd::Emphasis) if capturing => {
                buffer.push('*')
            }
            Event::Start(Tag::Strong) | Event::End(TagEnd::Strong) if capturing => {
                buffer.push_str("**")
            }
            Event::SoftBreak | Event::HardBreak if capturing => buffer.push('\n'),
            Event::End(TagEnd::Heading(_)) => {
                let text = buffer.trim().to_string();
                match capture {
                    Capture::Heading(HeadingLevel::H1) => {
                        if let Some(done) = current.take() {
                            drafts.push(done.finish());
                        }
                        pending_file_name = None;
                        current = Some(OpenDraft::new(text));
                    }
                    Capture::Heading(_) => {
                        if let Some(open) = current.as_mut() {
                            open.close_header();
                        }
                        pending_file_name = Some(text);
                    }
                    _ => {}
                }
                capture = Capture::None;
            }
            Event::End(TagEnd::Paragraph) => {
                if matches!(capture, Capture::Paragraph) {
                    if let Some(open) = current.as_mut() {
                        open.push_paragraph(buffer.trim().to_string());
                    }
                    capture = Capture::None;
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let (Capture::Code(info), Some(open)) = (&capture, current.as_mut()) {
                    open.close_header();
                    let draft = &mut open.draft;
                    let file_name = pending_file_name
                        .take()
                        .unwrap_or_else(|| format!("fragment-{}", draft.fragments.len() + 1));
                    let language = if info.is_empty() {
                        language_for_file_name(&file_name)
                            .unwrap_or_default()
                            .to_string()
                    } else {
                        info.clone()
                    };
                    let code = buffer.strip_suffix('\n').unwrap_or(&buffer).to_string();
                    draft.fragments.push(Fragment::new(file_name, language, code));
                }
                capture = Capture::None;
            }
            _ => {}
        }
    }

    if let Some(done) = current {
        drafts.push(done.finish());
    }
    drafts
}

fn push_inline_code(buffer: &mut String, code: &str) {
    let fence = if code.contains('`') { "``" } else { "`" };
    let pad = if fence.len() > 1 { " " } else { "" };
    buffer.push_str(fence);
    buffer.push_str(pad);
    buffer.push_str(code);
    buffer.push_str(pad);
    buffer.push_str(fence);
}

fn parse_categories(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn append_description(draft: &mut SnippetDraft, text: &str) {
    if text.is_empty() {
        return;
    }
    if !draft.description.is_empty() {
        draft.description.push_str("\n\n");
    }
    draft.description.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Snippet {
        let mut s = Snippet::new(
            "HTTP helpers",
            vec![
                Fragment::new("fetch.py", "python", "import requests\nrequests.get(url)"),
                Fragment::new("notes.txt", "", "remember the timeout"),
            ],
        );
        s.description = "Small wrappers\n\nUsed by the crawler".into();
        s.categories = vec!["web".into(), "http".into()];
        s
    }

    #[test]
    fn test_export_layout() {
        let md = to_markdown(&[sample()]).unwrap();
        assert!(md.contains("# HTTP helpers"));
        assert!(md.contains("Categories: web, http"));
        assert!(md.contains("## fetch.py"));
        assert!(md.contains("python"));
        assert!(md.contains("requests.get(url)"));
    }

    #[test]
    fn test_export_then_import_keeps_content() {
        let original = sample();
        let second = Snippet::new("Second", vec![Fragment::new("a.rs", "rust", "fn a() {}")]);
        let md = to_markdown(&[original.clone(), second]).unwrap();

        let drafts = parse_markdown(&md);
        assert_eq!(drafts.len(), 2);

        let first = drafts[0].clone().into_snippet(Utc::now()).unwrap();
        assert_eq!(first.title, original.title);
        assert_eq!(first.description, original.description);
        assert_eq!(first.categories, original.categories);
        assert_eq!(first.fragments[0], original.fragments[0]);
        assert_eq!(first.fragments[1].file_name, "notes.txt");
        assert_eq!(first.fragments[1].code, "remember the timeout");

        assert_eq!(drafts[1].title, "Second");
        assert_eq!(drafts[1].fragments[0].code, "fn a() {}");
    }

    #[test]
    fn test_import_infers_language_and_names() {
        let md = "intro is ignored\n\n# Tools\n\n## build.sh\n\n```\nmake\n```\n\n\
                  ```js\nx()\n```\n";
        let drafts = parse_markdown(md);
        assert_eq!(drafts.len(), 1);
        let fragments = &drafts[0].fragments;
        assert_eq!(fragments[0].file_name, "build.sh");
        assert_eq!(fragments[0].language, "bash");
        assert_eq!(fragments[1].file_name, "fragment-2");
        assert_eq!(fragments[1].language, "js");
    }

    #[test]
    fn test_heading_without_code_yields_invalid_draft() {
        let drafts = parse_markdown("# Empty\n\nJust words.\n");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].description, "Just words.");
        assert!(drafts[0].clone().into_snippet(Utc::now()).is_err());
    }

    fn round_trip(snippet: &Snippet) -> Snippet {
        let md = to_markdown(std::slice::from_ref(snippet)).unwrap();
        let drafts = parse_markdown(&md);
        assert_eq!(drafts.len(), 1, "document:\n{md}");
        drafts[0].clone().into_snippet(Utc::now()).unwrap()
    }

    #[test]
    fn test_markup_characters_survive_round_trip() {
        let mut s = Snippet::new(
            "Use *glob* `fmt` in C# & __rust__",
            vec![Fragment::new("x_y.rs", "rust", "let a = b * c;")],
        );
        s.description = "Categories: not really\n\nline one\nline two\n\n\
                         - not a list\n1. nor this\n> nor a quote\n[link](x) <b>"
            .into();
        s.categories = vec!["c*".into()];

        let back = round_trip(&s);
        assert_eq!(back.title, s.title);
        assert_eq!(back.description, s.description);
        assert_eq!(back.categories, s.categories);
        assert_eq!(back.fragments, s.fragments);
    }

    #[test]
    fn test_trailing_categories_like_paragraph_stays_description() {
        let mut s = Snippet::new("T", vec![Fragment::new("a.txt", "", "x")]);
        s.description = "intro\n\nCategories: part of the text".into();

        let back = round_trip(&s);
        assert_eq!(back.description, s.description);
        assert!(back.categories.is_empty());
    }

    #[test]
    fn test_only_last_header_paragraph_sets_categories() {
        let md = "# T\n\nCategories: early\n\nbody\n\nCategories: a, b\n\n\
                  ## f.txt\n\n```\nx\n```\n";
        let drafts = parse_markdown(md);
        assert_eq!(drafts[0].categories, vec!["a", "b"]);
        assert_eq!(drafts[0].description, "Categories: early\n\nbody");
    }

    #[test]
    fn test_import_keeps_inline_markup() {
        let md = "# A *b* **c** `d`\n\n## f.txt\n\n```\nx\n```\n";
        let drafts = parse_markdown(md);
        assert_eq!(drafts[0].title, "A *b* **c** `d`");
    }
}
