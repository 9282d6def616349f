use crate::config::NotesConfig;
use crate::model::NoteEntry;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod edit;
pub mod list;
pub mod paths;
pub mod preview;
pub mod search;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note body ready to show, raw or rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewedNote {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Identifiers written by the command
    pub affected: Vec<String>,
    pub listed_notes: Vec<NoteEntry>,
    pub viewed: Option<ViewedNote>,
    pub paths: Vec<PathBuf>,
    pub config: Option<NotesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, identifier: impl Into<String>) -> Self {
        self.affected.push(identifier.into());
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<NoteEntry>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_viewed(mut self, viewed: ViewedNote) -> Self {
        self.viewed = Some(viewed);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: NotesConfig) -> Self {
        self.config = Some(config);
        self
    }
}
