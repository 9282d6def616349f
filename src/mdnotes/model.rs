use crate::error::NoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stored note as the aggregate document records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// One line of a listing: the on-disk identifier plus the best known title.
///
/// The flat backend does not keep the original title, so there both fields
/// hold the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub identifier: String,
    pub title: String,
}

impl NoteEntry {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
        }
    }

    /// Entry for a backend that only knows identifiers.
    pub fn bare(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            title: identifier.clone(),
            identifier,
        }
    }
}

/// The aggregate backend's whole document: `{"notes": [{title, content}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFile {
    #[serde(default)]
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One `<identifier>.md` file per note.
    #[default]
    Flat,
    /// All notes in a single `notes.json` document.
    Aggregate,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Flat => write!(f, "flat"),
            BackendKind::Aggregate => write!(f, "aggregate"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "files" => Ok(BackendKind::Flat),
            "aggregate" | "json" => Ok(BackendKind::Aggregate),
            other => Err(NoteError::Config(format!(
                "Unknown backend '{}', expected 'flat' or 'aggregate'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_file_serializes_as_object_with_notes_array() {
        let file = NoteFile {
            notes: vec![Note::new("Plan", "a")],
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"notes": [{"title": "Plan", "content": "a"}]})
        );
    }

    #[test]
    fn note_file_tolerates_missing_fields() {
        let file: NoteFile = serde_json::from_str("{}").unwrap();
        assert!(file.notes.is_empty());

        let file: NoteFile = serde_json::from_str(r#"{"notes":[{"title":"x"}]}"#).unwrap();
        assert_eq!(file.notes[0].content, "");
    }

    #[test]
    fn backend_kind_parses_names() {
        assert_eq!("flat".parse::<BackendKind>().unwrap(), BackendKind::Flat);
        assert_eq!(
            " Aggregate ".parse::<BackendKind>().unwrap(),
            BackendKind::Aggregate
        );
        assert!("sqlite".parse::<BackendKind>().is_err());
    }

    #[test]
    fn bare_entry_uses_identifier_as_title() {
        let entry = NoteEntry::bare("Plan_1");
        assert_eq!(entry.title, "Plan_1");
    }
}
