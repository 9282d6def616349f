use super::menu::Menu;
use super::print::{print_config, print_messages, print_notes, print_paths, print_viewed};
use super::setup::{join_words, Cli, Commands};
use directories::ProjectDirs;
use mdnotes::api::{CmdMessage, CmdResult, ConfigAction, NotesApi, ViewFormat};
use mdnotes::config::NotesConfig;
use mdnotes::editor;
use mdnotes::error::{NoteError, Result};
use mdnotes::model::BackendKind;
use mdnotes::search::SearchMode;
use mdnotes::store::{self, NoteStore, StoreConfig};
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Environment variable naming the notes root.
pub const ROOT_ENV: &str = "MDNOTES_ROOT";

pub struct AppContext {
    pub api: NotesApi<Box<dyn NoteStore>>,
    pub config: NotesConfig,
}

impl AppContext {
    pub fn open(root: PathBuf, backend: Option<BackendKind>) -> Result<Self> {
        let config = NotesConfig::load(&root)?;
        let kind = backend.unwrap_or(config.backend);
        let store = store::open(kind, &StoreConfig::new(&root))?;
        Ok(Self {
            api: NotesApi::new(store, root),
            config,
        })
    }
}

/// `--root`, then `$MDNOTES_ROOT`, then the user data dir with `--global`, then the cwd.
pub fn resolve_root(
    flag: Option<PathBuf>,
    global: bool,
    env_root: Option<String>,
) -> Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }
    if let Some(root) = env_root.filter(|r| !r.trim().is_empty()) {
        return Ok(PathBuf::from(root));
    }
    if global {
        let dirs = ProjectDirs::from("com", "mdnotes", "mdnotes").ok_or_else(|| {
            NoteError::Config("Could not determine the user data directory".to_string())
        })?;
        return Ok(dirs.data_dir().to_path_buf());
    }
    Ok(std::env::current_dir()?)
}

pub fn run() -> Result<()> {
    let cli = <Cli as clap::Parser>::parse();

    if let Err(e) = mdnotes::logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let root = resolve_root(cli.root, cli.global, std::env::var(ROOT_ENV).ok())?;
    let mut ctx = AppContext::open(root, cli.backend.map(Into::into))?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            stdin,
        }) => handle_create(&mut ctx, title, content, stdin),
        Some(Commands::View { title, html }) => handle_view(&ctx, &join_words(&title), html),
        Some(Commands::Edit { title, inline }) => handle_edit(&mut ctx, &title, inline),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { query, mode }) => {
            handle_search(&ctx, mode.into(), &join_words(&query))
        }
        Some(Commands::Preview { title, output }) => {
            handle_preview(&ctx, &join_words(&title), output)
        }
        Some(Commands::Path { title }) => handle_path(&ctx, &join_words(&title)),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            Menu::new(&mut ctx, stdin.lock(), io::stdout()).run()
        }
    }
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    content: Option<String>,
    from_stdin: bool,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None if from_stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => {
            let editor = editor::get_editor(ctx.config.editor.as_deref())?;
            editor::edit_text(&editor, "")?
        }
    };

    let result = ctx.api.create_note(&title, &content)?;
    emit(&result)
}

fn handle_view(ctx: &AppContext, title: &str, html: bool) -> Result<()> {
    let format = if html { ViewFormat::Html } else { ViewFormat::Raw };
    let result = ctx.api.view_note(title, format)?;
    emit(&result)
}

fn handle_edit(ctx: &mut AppContext, title: &str, inline: Option<String>) -> Result<()> {
    let result = match inline {
        Some(content) => ctx.api.edit_note(title, &content)?,
        None => edit_with_editor(ctx, title)?,
    };
    emit(&result)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&mut io::stdout(), &result.listed_notes)?;
    Ok(())
}

fn handle_search(ctx: &AppContext, mode: SearchMode, query: &str) -> Result<()> {
    let result = ctx.api.search_notes(mode, query)?;
    emit(&result)
}

fn handle_preview(ctx: &AppContext, title: &str, output: Option<String>) -> Result<()> {
    let file_name = output.unwrap_or_else(|| ctx.config.preview_file.clone());
    let result = ctx.api.preview_note(title, &file_name)?;
    emit(&result)
}

fn handle_path(ctx: &AppContext, title: &str) -> Result<()> {
    let result = ctx.api.note_path(title)?;
    print_paths(&mut io::stdout(), &result.paths)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    let mut out = io::stdout();
    print_messages(&mut out, &result.messages)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(&mut out, config)?;
        }
    }
    Ok(())
}

/// Opens the note's current body in the editor and saves the result.
/// An untouched body is reported and not written.
pub fn edit_with_editor(ctx: &mut AppContext, title: &str) -> Result<CmdResult> {
    let current = ctx.api.note_body(title)?;
    let editor = editor::get_editor(ctx.config.editor.as_deref())?;
    let edited = editor::edit_text(&editor, &current)?;

    if edited == current {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No changes made"));
        return Ok(result);
    }
    ctx.api.edit_note(title, &edited)
}

/// Prints every part of a result to stdout.
fn emit(result: &CmdResult) -> Result<()> {
    let mut out = io::stdout();
    write_result(&mut out, result)?;
    out.flush()?;
    Ok(())
}

pub fn write_result(out: &mut dyn Write, result: &CmdResult) -> io::Result<()> {
    if let Some(viewed) = &result.viewed {
        print_viewed(out, viewed)?;
    }
    if !result.listed_notes.is_empty() {
        print_notes(out, &result.listed_notes)?;
    }
    print_messages(out, &result.messages)
}
