use super::{
    lookup_identifier, require_content, require_title, write_atomic, NoteStore, StoreConfig,
    Updated,
};
use crate::backup;
use crate::error::{NoteError, Result};
use crate::identity;
use crate::model::{BackendKind, Note, NoteEntry, NoteFile};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Every note in one JSON document.
///
/// The document is read once in [`AggregateStore::open`] and the in-memory copy
/// is the source of truth for the rest of the session. Each mutation rewrites
/// the whole file; the in-memory state only changes after that write succeeds.
pub struct AggregateStore {
    path: PathBuf,
    file: NoteFile,
    identifiers: Vec<String>,
}

impl AggregateStore {
    /// Loads the document, treating a missing file as an empty collection.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.document_path();
        let file = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => NoteFile::default(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => NoteFile::default(),
            Err(err) => return Err(NoteError::Io(err)),
        };
        let identifiers =
            identity::assign_identifiers(file.notes.iter().map(|n| n.title.as_str()));
        debug!("loaded {} notes from {}", file.notes.len(), path.display());

        Ok(Self {
            path,
            file,
            identifiers,
        })
    }

    fn position(&self, identifier: &str) -> Option<usize> {
        self.identifiers.iter().position(|id| id == identifier)
    }

    /// First record stored under exactly this title, else the one whose
    /// identifier matches the title's base name.
    fn existing_note(&self, title: &str) -> Result<usize> {
        let identifier = lookup_identifier(title)?;
        let wanted = title.trim();
        self.file
            .notes
            .iter()
            .position(|note| note.title == wanted)
            .or_else(|| self.position(&identifier))
            .ok_or_else(|| NoteError::NotFound(wanted.to_string()))
    }

    /// Rewrites the document, backing up the previous version when there is one.
    fn persist(&self, file: &NoteFile) -> Result<Option<PathBuf>> {
        let backup = if self.path.exists() {
            Some(backup::backup(&self.path)?)
        } else {
            None
        };

        let content = serde_json::to_string_pretty(file)?;
        write_atomic(&self.path, content.as_bytes())?;
        Ok(backup)
    }
}

impl NoteStore for AggregateStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Aggregate
    }

    fn create(&mut self, title: &str, content: &str) -> Result<String> {
        let title = require_title(title)?;

        let taken: HashSet<String> = self.identifiers.iter().cloned().collect();
        let identifier = identity::unique_identifier(&identity::base_name(title), &taken);

        let mut next = self.file.clone();
        next.notes.push(Note::new(title, content));
        self.persist(&next)?;

        self.file = next;
        self.identifiers.push(identifier.clone());
        debug!("appended note '{}' as {}", title, identifier);
        Ok(identifier)
    }

    fn read(&self, title: &str) -> Result<String> {
        let index = self.existing_note(title)?;
        Ok(self.file.notes[index].content.clone())
    }

    fn update(&mut self, title: &str, content: &str) -> Result<Updated> {
        let index = self.existing_note(title)?;
        require_content(content)?;

        let mut next = self.file.clone();
        next.notes[index].content = content.to_string();
        let backup = self
            .persist(&next)?
            .unwrap_or_else(|| backup::backup_path(&self.path));

        self.file = next;
        let identifier = self.identifiers[index].clone();
        debug!("updated note {}", identifier);
        Ok(Updated { identifier, backup })
    }

    fn list(&self) -> Result<Vec<NoteEntry>> {
        Ok(self
            .identifiers
            .iter()
            .zip(self.file.notes.iter())
            .map(|(identifier, note)| NoteEntry::new(identifier.clone(), note.title.clone()))
            .collect())
    }

    fn load_body(&self, identifier: &str) -> Result<Option<String>> {
        Ok(self
            .position(identifier)
            .map(|index| self.file.notes[index].content.clone()))
    }

    fn location(&self, title: &str) -> Result<PathBuf> {
        self.existing_note(title)?;
        Ok(self.path.clone())
    }
}
