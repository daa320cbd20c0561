//! # CLI Layer
//!
//! One possible client of the codehub library. This is the only place that
//! parses arguments, touches stdin/stdout/stderr and turns a `CmdResult`
//! into terminal output.
//!
//! - `run()`: dispatch (called by `main.rs`)
//! - `init_context()`: config directory, config, library file and API
//! - `handle_*()`: one per subcommand; call the API, then render

use super::render::{
    eprint_messages, print_messages, render_config, render_facets, render_full_snippets,
    render_snippet_list,
};
use super::setup::{
    Cli, Commands, CoreCommands, DataCommands, MiscCommands, SnippetCommands, ViewArgs,
};
use clap::Parser;
use codehub::api::{CodeHubApi, ConfigAction, SnippetEdit};
use codehub::config::{self, CodeHubConfig};
use codehub::embed::{EmbedOptions, EmbedTheme};
use codehub::error::{CodeHubError, Result};
use codehub::format::{ExportFormat, ImportFormat};
use codehub::model::{Collection, Snippet};
use codehub::store::file::FileStore;
use codehub::view::{QueryParams, SearchOptions, ViewState};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

struct AppContext {
    api: CodeHubApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::List { view, bin } => handle_list(&ctx, view, bin),
            CoreCommands::Facets { bin } => handle_facets(&ctx, bin),
            CoreCommands::View { ids, bin } => handle_view(&ctx, ids, bin),
        },
        Some(Commands::Snippet(cmd)) => match cmd {
            SnippetCommands::Delete { ids } => {
                let result = ctx.api.delete_snippets(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            SnippetCommands::Restore { ids } => {
                let result = ctx.api.restore_snippets(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            SnippetCommands::Pin { ids } => {
                let result = ctx.api.pin_snippets(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            SnippetCommands::Unpin { ids } => {
                let result = ctx.api.unpin_snippets(&ids)?;
                print_messages(&result.messages);
                Ok(())
            }
            SnippetCommands::Fav { ids } => handle_favorite(&mut ctx, ids, true),
            SnippetCommands::Unfav { ids } => handle_favorite(&mut ctx, ids, false),
            SnippetCommands::Edit {
                id,
                title,
                description,
                categories,
                clear_categories,
            } => {
                let categories = if clear_categories {
                    Some(Vec::new())
                } else if categories.is_empty() {
                    None
                } else {
                    Some(categories)
                };
                let edit = SnippetEdit {
                    title,
                    description,
                    fragments: None,
                    categories,
                };
                let result = ctx.api.edit_snippet(&id, edit)?;
                print_messages(&result.messages);
                Ok(())
            }
            SnippetCommands::Duplicate { id } => {
                let result = ctx.api.duplicate_snippet(&id)?;
                print_messages(&result.messages);
                Ok(())
            }
            SnippetCommands::Embed {
                id,
                hide_title,
                hide_description,
                hide_file_headers,
                hide_powered_by,
                theme,
                fragment,
            } => {
                let options = EmbedOptions {
                    show_title: !hide_title,
                    show_description: !hide_description,
                    show_file_headers: !hide_file_headers,
                    show_powered_by: !hide_powered_by,
                    theme: theme.unwrap_or(EmbedTheme::System),
                    fragment_index: fragment,
                };
                println!("{}", ctx.api.embed_url(&id, &options)?);
                Ok(())
            }
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Import { file, format } => handle_import(&mut ctx, file, format),
            DataCommands::Export {
                view,
                format,
                output,
                bin,
            } => handle_export(&ctx, view, format, output, bin),
            DataCommands::Purge { ids, view, yes } => handle_purge(&mut ctx, ids, view, yes),
        },
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            handle_config(&mut ctx, key, value)
        }
        None => handle_list(&ctx, ViewArgs::default(), false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config::config_dir()?;
    let config = CodeHubConfig::load(&config_dir)?;
    let library = cli
        .library
        .clone()
        .unwrap_or_else(|| config.library_path(&config_dir));

    let store = FileStore::open(library)?;
    Ok(AppContext {
        api: CodeHubApi::new(store, config, config_dir),
    })
}

fn collection(bin: bool) -> Collection {
    if bin {
        Collection::RecycleBin
    } else {
        Collection::Active
    }
}

/// Builds the view state: configured sort, then the share query, then flags.
fn view_state(ctx: &AppContext, args: &ViewArgs) -> (ViewState, SearchOptions) {
    let params = QueryParams::parse(args.query.as_deref().unwrap_or_default());
    let mut state = ctx.api.initial_state(&params);

    if let Some(sort) = args.sort {
        state.sort_order = sort;
    }
    if let Some(search) = &args.search {
        state.search_term = search.clone();
    }
    for category in &args.categories {
        if !state.selected_categories.contains(category) {
            state.toggle_category(category);
        }
    }
    if let Some(language) = &args.language {
        state.set_language(language);
    }
    state.show_favorites = args.favorites;

    let options = ctx.api.search_options(args.code.then_some(true));
    (state, options)
}

fn handle_list(ctx: &AppContext, args: ViewArgs, bin: bool) -> Result<()> {
    let (state, options) = view_state(ctx, &args);
    let result = ctx.api.list_snippets(collection(bin), &state, options)?;

    print!("{}", render_snippet_list(&result.listed_snippets));
    let share = state.to_params();
    if !share.is_empty() {
        println!("\nShare: ?{}", share);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_facets(ctx: &AppContext, bin: bool) -> Result<()> {
    let result = ctx.api.facets(collection(bin))?;
    if let Some(facets) = &result.facets {
        print!("{}", render_facets(facets));
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>, bin: bool) -> Result<()> {
    let result = ctx.api.view_snippets(collection(bin), &ids)?;
    print!("{}", render_full_snippets(&result.listed_snippets));
    Ok(())
}

fn handle_favorite(ctx: &mut AppContext, ids: Vec<String>, is_favorite: bool) -> Result<()> {
    let result = ctx.api.set_favorite(&ids, is_favorite)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(
    ctx: &mut AppContext,
    file: PathBuf,
    format: Option<ImportFormat>,
) -> Result<()> {
    let input = fs::read_to_string(&file)?;
    let format =
        format.unwrap_or_else(|| ImportFormat::from_file_name(&file.to_string_lossy()));

    let result = ctx.api.import_snippets(&input, format)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    args: ViewArgs,
    format: ExportFormat,
    output: Option<PathBuf>,
    bin: bool,
) -> Result<()> {
    let (state, options) = view_state(ctx, &args);
    let result = ctx
        .api
        .export_snippets(collection(bin), &state, options, format)?;
    let bytes = result
        .exported
        .as_deref()
        .ok_or_else(|| CodeHubError::Api("Export produced no output".into()))?;

    let output = match (output, format) {
        (Some(path), _) => Some(path),
        (None, ExportFormat::Archive) => Some(PathBuf::from(format!(
            "codehub-{}.{}",
            chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S"),
            format.extension()
        ))),
        (None, _) => None,
    };

    match output {
        Some(path) => {
            fs::write(&path, bytes)?;
            print_messages(&result.messages);
            println!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            eprint_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_purge(ctx: &mut AppContext, ids: Vec<String>, args: ViewArgs, yes: bool) -> Result<()> {
    let confirm = |targets: &[Snippet]| yes || prompt_purge(targets);

    let result = if ids.is_empty() {
        let (state, options) = view_state(ctx, &args);
        ctx.api.purge_visible(&state, options, confirm)?
    } else {
        ctx.api.purge_snippets(&ids, confirm)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn prompt_purge(targets: &[Snippet]) -> bool {
    println!("This will permanently remove the following snippets:");
    for snippet in targets {
        println!("  {} {}", snippet.id, snippet.title);
    }
    print!("[Y] To delete: ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_) => input.trim() == "Y",
        Err(_) => false,
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(CodeHubError::Config("configuration unchanged".into()));
    }
    Ok(())
}
