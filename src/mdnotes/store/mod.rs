//! # Storage Layer
//!
//! The [`NoteStore`] trait is the one contract every backend honours:
//! `create`, `read`, `update` and `list`, plus the lookups search and the
//! editor need. Which backend runs is decided once, at configuration time,
//! by [`open`].
//!
//! ## Backends
//!
//! - [`flat::FlatStore`]: one file per note, `notes/<identifier>.md`, raw body
//!   text with no front matter. Listing is the directory, sorted by identifier.
//! - [`aggregate::AggregateStore`]: every note in a single `notes.json`
//!   document, loaded wholesale when the store opens and rewritten wholesale on
//!   every mutation. Listing follows insertion order.
//!
//! ## Storage Layout
//!
//! ```text
//! <root>/
//! ├── mdnotes.json          # Configuration (optional)
//! ├── notes/                # Flat backend
//! │   ├── Plan.md
//! │   ├── Plan.md.bak       # Single-generation backup
//! │   └── Plan_1.md
//! ├── notes.json            # Aggregate backend
//! └── notes.json.bak
//! ```
//!
//! ## Shared rules
//!
//! - `create` rejects a blank title with [`NoteError::EmptyTitle`] and stores
//!   the content verbatim, empty or not.
//! - `read` and `update` resolve a title through [`identity::base_name`]. A
//!   note stored under a suffixed identifier (`Plan_1`) is not reachable by
//!   title, only through listing and search.
//! - `update` rejects whitespace-only content with [`NoteError::EmptyContent`]
//!   and never overwrites without a successful backup.
//! - Every write lands in a temp file first and is renamed into place.
//!
//! No locking is done. Two processes sharing a root can lose updates; the
//! store is meant for a single running instance.

use crate::error::{NoteError, Result};
use crate::identity;
use crate::model::{BackendKind, NoteEntry};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub mod aggregate;
pub mod flat;

pub const NOTES_DIR: &str = "notes";
pub const DOCUMENT_FILE: &str = "notes.json";

/// Where a store keeps its data. The root is always injected, never implied
/// by the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.root.join(NOTES_DIR)
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(DOCUMENT_FILE)
    }
}

/// Result of a successful `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Updated {
    pub identifier: String,
    /// Where the pre-update bytes were preserved.
    pub backup: PathBuf,
}

/// Abstract interface over note persistence.
pub trait NoteStore {
    /// Which backend this is.
    fn kind(&self) -> BackendKind;

    /// Persist a new note and return the identifier it was stored under.
    fn create(&mut self, title: &str, content: &str) -> Result<String>;

    /// Body of the note a title resolves to.
    fn read(&self, title: &str) -> Result<String>;

    /// Back up and overwrite the body of the note a title resolves to.
    fn update(&mut self, title: &str, content: &str) -> Result<Updated>;

    /// Every stored note, in the backend's stable order.
    fn list(&self) -> Result<Vec<NoteEntry>>;

    /// Body by identifier, `None` when no such note exists.
    fn load_body(&self, identifier: &str) -> Result<Option<String>>;

    /// The file that holds the note a title resolves to.
    fn location(&self, title: &str) -> Result<PathBuf>;

    /// Identifiers only, in listing order.
    fn identifiers(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|e| e.identifier).collect())
    }
}

impl<S: NoteStore + ?Sized> NoteStore for Box<S> {
    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn create(&mut self, title: &str, content: &str) -> Result<String> {
        (**self).create(title, content)
    }

    fn read(&self, title: &str) -> Result<String> {
        (**self).read(title)
    }

    fn update(&mut self, title: &str, content: &str) -> Result<Updated> {
        (**self).update(title, content)
    }

    fn list(&self) -> Result<Vec<NoteEntry>> {
        (**self).list()
    }

    fn load_body(&self, identifier: &str) -> Result<Option<String>> {
        (**self).load_body(identifier)
    }

    fn location(&self, title: &str) -> Result<PathBuf> {
        (**self).location(title)
    }
}

/// Opens the configured backend.
pub fn open(kind: BackendKind, config: &StoreConfig) -> Result<Box<dyn NoteStore>> {
    debug!("opening {} store at {}", kind, config.root.display());
    match kind {
        BackendKind::Flat => Ok(Box::new(flat::FlatStore::new(config))),
        BackendKind::Aggregate => Ok(Box::new(aggregate::AggregateStore::open(config)?)),
    }
}

/// Trimmed title, or `EmptyTitle` when nothing is left.
pub(crate) fn require_title(title: &str) -> Result<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(NoteError::EmptyTitle);
    }
    Ok(trimmed)
}

pub(crate) fn require_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(NoteError::EmptyContent);
    }
    Ok(())
}

/// Identifier a lookup title points at.
pub(crate) fn lookup_identifier(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(NoteError::NotFound(title.to_string()));
    }
    Ok(identity::base_name(trimmed))
}

/// Writes `bytes` to a temp file beside `path`, then renames it over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let tmp_path = dir.join(format!(".mdnotes-{}.tmp", Uuid::new_v4()));
    if let Err(err) = fs::write(&tmp_path, bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(NoteError::Io(err));
    }
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(NoteError::Io(err));
    }

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
