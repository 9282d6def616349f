use super::{
    lookup_identifier, require_content, require_title, write_atomic, NoteStore, StoreConfig,
    Updated,
};
use crate::backup;
use crate::error::{NoteError, Result};
use crate::identity::{self, NOTE_EXT};
use crate::model::{BackendKind, NoteEntry};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

/// One note per file under `<root>/notes/`.
pub struct FlatStore {
    dir: PathBuf,
}

impl FlatStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            dir: config.notes_dir(),
        }
    }

    fn note_path(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{}{}", identifier, NOTE_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// File names currently in the notes directory; empty if it does not exist yet.
    fn existing_names(&self) -> Result<HashSet<String>> {
        let mut names = HashSet::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(names),
            Err(err) => return Err(NoteError::Io(err)),
        };
        for entry in entries {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                names.insert(name.to_string());
            }
        }
        Ok(names)
    }

    /// Path of an existing note, or `NotFound` for the title.
    fn existing_note(&self, title: &str) -> Result<(String, PathBuf)> {
        let identifier = lookup_identifier(title)?;
        let path = self.note_path(&identifier);
        if !path.is_file() {
            return Err(NoteError::NotFound(title.trim().to_string()));
        }
        Ok((identifier, path))
    }
}

impl NoteStore for FlatStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Flat
    }

    fn create(&mut self, title: &str, content: &str) -> Result<String> {
        let title = require_title(title)?;
        self.ensure_dir()?;

        let base = identity::base_name(title);
        let mut names = self.existing_names()?;
        // The probe also catches names a case-insensitive filesystem folds together.
        let filename = loop {
            let candidate = identity::unique_filename(&base, &names);
            if !self.dir.join(&candidate).exists() {
                break candidate;
            }
            names.insert(candidate);
        };

        write_atomic(&self.dir.join(&filename), content.as_bytes())?;

        let identifier = filename
            .strip_suffix(NOTE_EXT)
            .unwrap_or(&filename)
            .to_string();
        debug!("created note '{}' as {}", title, identifier);
        Ok(identifier)
    }

    fn read(&self, title: &str) -> Result<String> {
        let identifier = lookup_identifier(title)?;
        match self.load_body(&identifier)? {
            Some(content) => Ok(content),
            None => Err(NoteError::NotFound(title.trim().to_string())),
        }
    }

    fn update(&mut self, title: &str, content: &str) -> Result<Updated> {
        let (identifier, path) = self.existing_note(title)?;
        require_content(content)?;

        let backup = backup::backup(&path)?;
        write_atomic(&path, content.as_bytes())?;

        debug!("updated note {}", identifier);
        Ok(Updated { identifier, backup })
    }

    fn list(&self) -> Result<Vec<NoteEntry>> {
        let mut identifiers: Vec<String> = self
            .existing_names()?
            .into_iter()
            .filter(|name| !name.starts_with('.'))
            .filter_map(|name| name.strip_suffix(NOTE_EXT).map(str::to_string))
            .filter(|identifier| self.note_path(identifier).is_file())
            .collect();
        identifiers.sort();
        Ok(identifiers.into_iter().map(NoteEntry::bare).collect())
    }

    fn load_body(&self, identifier: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.note_path(identifier)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(NoteError::Io(err)),
        }
    }

    fn location(&self, title: &str) -> Result<PathBuf> {
        self.existing_note(title).map(|(_, path)| path)
    }
}
