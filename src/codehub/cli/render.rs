//! # Rendering Module
//!
//! Turns command results into terminal text. Layout math (widths, truncation,
//! padding) is Unicode-aware; colors come from [`super::styles`] and are
//! dropped automatically when stdout is not a terminal.

use super::styles;
use chrono::{DateTime, Utc};
use codehub::api::{CmdMessage, MessageLevel};
use codehub::config::{CodeHubConfig, CONFIG_KEYS};
use codehub::model::Snippet;
use codehub::view::Facets;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const ID_WIDTH: usize = 8;
pub const PIN_MARKER: &str = "⚲";
pub const FAVORITE_MARKER: &str = "★";

/// One line per snippet: pin marker, short id, title with languages,
/// favorite marker and age. Pinned snippets are set apart by a blank line.
pub fn render_snippet_list(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return "No snippets found.\n".to_string();
    }

    let mut out = String::new();
    let mut last_was_pinned = false;

    for snippet in snippets {
        if last_was_pinned && !snippet.is_pinned {
            out.push('\n');
        }
        last_was_pinned = snippet.is_pinned;

        let left_prefix = if snippet.is_pinned {
            format!("  {} ", PIN_MARKER)
        } else {
            "    ".to_string()
        };
        let id = short_id(&snippet.id);
        let id_field = format!("{:<width$} ", id, width = ID_WIDTH);
        let right_suffix = if snippet.is_favorite {
            format!(" {} ", FAVORITE_MARKER)
        } else {
            "   ".to_string()
        };

        let languages = snippet_languages(snippet);
        let title_text = if languages.is_empty() {
            snippet.title.clone()
        } else {
            format!("{} [{}]", snippet.title, languages.join(", "))
        };

        let fixed = left_prefix.width() + id_field.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_display = truncate_to_width(&title_text, available);
        let padding = available.saturating_sub(title_display.width());

        let id_style = if snippet.is_pinned {
            &*styles::PINNED
        } else {
            &*styles::ID
        };

        out.push_str(&format!(
            "{}{}{}{}{}{}\n",
            left_prefix,
            id_style.apply_to(id_field),
            title_display,
            " ".repeat(padding),
            styles::FAVORITE.apply_to(right_suffix),
            styles::TIME.apply_to(format_time_ago(snippet.updated_at)),
        ));
    }

    out
}

/// Full snippets: header, description, categories and every fragment.
pub fn render_full_snippets(snippets: &[Snippet]) -> String {
    let mut out = String::new();

    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        let mut markers = String::new();
        if snippet.is_pinned {
            markers.push_str(&format!(" {}", PIN_MARKER));
        }
        if snippet.is_favorite {
            markers.push_str(&format!(" {}", FAVORITE_MARKER));
        }
        out.push_str(&format!(
            "{} {}{}\n",
            styles::ID.apply_to(&snippet.id),
            styles::TITLE.apply_to(&snippet.title),
            markers
        ));
        if !snippet.description.is_empty() {
            out.push_str(&format!("{}\n", snippet.description));
        }
        if !snippet.categories.is_empty() {
            let tags: Vec<String> = snippet
                .categories
                .iter()
                .map(|c| styles::CATEGORY.apply_to(format!("#{}", c)).to_string())
                .collect();
            out.push_str(&format!("{}\n", tags.join(" ")));
        }

        for fragment in &snippet.fragments {
            out.push_str(&format!(
                "\n--- {} ({})\n",
                fragment.file_name,
                styles::LANGUAGE.apply_to(fragment.language_label())
            ));
            out.push_str(&fragment.code);
            if !fragment.code.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    out
}

pub fn render_facets(facets: &Facets) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", styles::TITLE.apply_to("Languages")));
    push_facet_lines(&mut out, &facets.languages, &styles::LANGUAGE);
    out.push_str(&format!("\n{}\n", styles::TITLE.apply_to("Categories")));
    push_facet_lines(&mut out, &facets.categories, &styles::CATEGORY);
    out
}

fn push_facet_lines(out: &mut String, values: &[String], style: &console::Style) {
    if values.is_empty() {
        out.push_str(&format!("  {}\n", styles::DIM.apply_to("(none)")));
    }
    for value in values {
        out.push_str(&format!("  {}\n", style.apply_to(value)));
    }
}

pub fn render_config(config: &CodeHubConfig) -> String {
    CONFIG_KEYS
        .iter()
        .map(|key| format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &*styles::INFO,
                MessageLevel::Success => &*styles::SUCCESS,
                MessageLevel::Warning => &*styles::WARNING,
                MessageLevel::Error => &*styles::ERROR,
            };
            format!("{}\n", style.apply_to(&msg.content))
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// For commands whose stdout is data (export to stdout).
pub fn eprint_messages(messages: &[CmdMessage]) {
    eprint!("{}", render_messages(messages));
}

fn short_id(id: &str) -> String {
    id.chars().take(ID_WIDTH).collect()
}

fn snippet_languages(snippet: &Snippet) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for fragment in &snippet.fragments {
        let label = fragment.language_label();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    if s.width() <= max_width {
        return s.to_string();
    }

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
