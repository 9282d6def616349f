use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Cannot save an empty note, changes discarded")]
    EmptyContent,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not back up {}: {source}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NoteError>;
