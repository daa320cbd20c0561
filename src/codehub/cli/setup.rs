use clap::{Args, Parser, Subcommand};
use codehub::embed::EmbedTheme;
use codehub::format::{ExportFormat, ImportFormat};
use codehub::view::SortOrder;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codehub", bin_name = "codehub", version)]
#[command(about = "Personal code-snippet library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub library: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Snippet(SnippetCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Filter and sort flags shared by `list`, `export` and `purge`.
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Search titles, descriptions, file names and languages
    #[arg(short, long)]
    pub search: Option<String>,

    /// Require a category (repeat to require several)
    #[arg(short, long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Only snippets with a fragment in this language
    #[arg(short, long)]
    pub language: Option<String>,

    /// newest, oldest, alpha-asc or alpha-desc
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Only favorites
    #[arg(short, long)]
    pub favorites: bool,

    /// Also search inside fragment code
    #[arg(long)]
    pub code: bool,

    /// Seed categories and language from a share query (e.g. "categories=web&language=Go")
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// List snippets
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// List the recycle bin instead
        #[arg(long)]
        bin: bool,
    },

    /// Show the languages and categories in use
    #[command(display_order = 2)]
    Facets {
        /// Facets of the recycle bin instead
        #[arg(long)]
        bin: bool,
    },

    /// Show snippets with all their fragments
    #[command(alias = "v", display_order = 3)]
    View {
        /// Snippet ids or unique id prefixes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Look in the recycle bin
        #[arg(long)]
        bin: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SnippetCommands {
    /// Move snippets to the recycle bin
    #[command(alias = "rm", display_order = 10)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Bring snippets back from the recycle bin
    #[command(display_order = 11)]
    Restore {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Pin snippets to the top of every list
    #[command(alias = "p", display_order = 12)]
    Pin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Unpin snippets
    #[command(alias = "u", display_order = 13)]
    Unpin {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Mark snippets as favorites
    #[command(display_order = 14)]
    Fav {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Unmark favorites
    #[command(display_order = 15)]
    Unfav {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Change a snippet's title, description or categories
    #[command(alias = "e", display_order = 16)]
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Replace the categories (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,

        /// Remove every category
        #[arg(long, conflicts_with = "categories")]
        clear_categories: bool,
    },

    /// Copy a snippet under a new id
    #[command(display_order = 17)]
    Duplicate { id: String },

    /// Print the embed URL of a snippet
    #[command(display_order = 18)]
    Embed {
        id: String,

        #[arg(long)]
        hide_title: bool,

        #[arg(long)]
        hide_description: bool,

        #[arg(long)]
        hide_file_headers: bool,

        #[arg(long)]
        hide_powered_by: bool,

        /// light, dark or system
        #[arg(long)]
        theme: Option<EmbedTheme>,

        /// Embed only this fragment (zero-based)
        #[arg(long, value_name = "INDEX")]
        fragment: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Import snippets from a JSON or Markdown file
    #[command(display_order = 20)]
    Import {
        file: PathBuf,

        /// json or markdown (guessed from the file name when omitted)
        #[arg(long)]
        format: Option<ImportFormat>,
    },

    /// Export the snippets a list would show
    #[command(display_order = 21)]
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// json, markdown or archive
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Export the recycle bin instead
        #[arg(long)]
        bin: bool,
    },

    /// Permanently delete snippets from the recycle bin
    #[command(display_order = 22)]
    Purge {
        /// Ids to purge; when omitted, purges everything the filters show
        #[arg(required = false, num_args = 0..)]
        ids: Vec<String>,

        #[command(flatten)]
        view: ViewArgs,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// sort, include-code, embed-base or library
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_list_flags() {
        let cli = parse(&[
            "codehub", "list", "-c", "web", "-c", "http", "--sort", "alpha-asc", "--bin",
        ]);
        match cli.command {
            Some(Commands::Core(CoreCommands::List { view, bin })) => {
                assert_eq!(view.categories, vec!["web", "http"]);
                assert_eq!(view.sort, Some(SortOrder::AlphaAsc));
                assert!(bin);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_global_library_after_subcommand() {
        let cli = parse(&["codehub", "facets", "--library", "/tmp/lib.json"]);
        assert_eq!(cli.library, Some(PathBuf::from("/tmp/lib.json")));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(Cli::try_parse_from(["codehub", "list", "--sort", "random"]).is_err());
        assert!(Cli::try_parse_from(["codehub", "export", "--format", "yaml"]).is_err());
        assert!(Cli::try_parse_from(["codehub", "embed", "x", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_purge_without_ids() {
        let cli = parse(&["codehub", "purge", "--yes", "-l", "Go"]);
        match cli.command {
            Some(Commands::Data(DataCommands::Purge { ids, view, yes })) => {
                assert!(ids.is_empty());
                assert!(yes);
                assert_eq!(view.language.as_deref(), Some("Go"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
