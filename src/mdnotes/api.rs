//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI: the one-shot subcommands and the interactive menu
//! both go through it.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does no
//! printing and holds no business rules of its own.
//!
//! ## Generic Over NoteStore
//!
//! `NotesApi<S: NoteStore, R: Renderer>`:
//! - Production: `NotesApi<Box<dyn NoteStore>>`, backend chosen from config
//! - Tests: either concrete backend over a temp directory

use crate::commands;
use crate::error::Result;
use crate::render::{MarkdownRenderer, Renderer};
use crate::search::SearchMode;
use crate::store::NoteStore;
use std::path::PathBuf;

pub struct NotesApi<S: NoteStore, R: Renderer = MarkdownRenderer> {
    store: S,
    renderer: R,
    root: PathBuf,
}

impl<S: NoteStore> NotesApi<S> {
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        Self::with_renderer(store, MarkdownRenderer, root)
    }
}

impl<S: NoteStore, R: Renderer> NotesApi<S, R> {
    pub fn with_renderer(store: S, renderer: R, root: impl Into<PathBuf>) -> Self {
        Self {
            store,
            renderer,
            root: root.into(),
        }
    }

    pub fn create_note(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn view_note(&self, title: &str, format: ViewFormat) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, &self.renderer, title, format)
    }

    pub fn edit_note(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, title, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_notes(&self, mode: SearchMode, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, mode, query)
    }

    /// Writes an HTML preview to `file_name`, relative to the root.
    pub fn preview_note(&self, title: &str, file_name: &str) -> Result<commands::CmdResult> {
        let target = self.root.join(file_name);
        commands::preview::run(&self.store, &self.renderer, title, &target)
    }

    pub fn note_path(&self, title: &str) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, title)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.root, action)
    }

    /// Raw body of a note, for callers that need to hand it to an editor.
    pub fn note_body(&self, title: &str) -> Result<String> {
        self.store.read(title)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::view::ViewFormat;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ViewedNote};
