use crate::error::{NoteError, Result};
use crate::model::BackendKind;
use crate::store::write_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

pub const CONFIG_FILENAME: &str = "mdnotes.json";
const DEFAULT_PREVIEW_FILE: &str = "preview.html";

/// Keys accepted by [`NotesConfig::get`] and [`NotesConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["backend", "editor", "preview-file"];

/// Configuration for a notes root, stored in `<root>/mdnotes.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Which storage backend the root uses
    #[serde(default)]
    pub backend: BackendKind,

    /// Editor command, overrides $EDITOR when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// File name, relative to the root, for HTML previews
    #[serde(default = "default_preview_file")]
    pub preview_file: String,
}

fn default_preview_file() -> String {
    DEFAULT_PREVIEW_FILE.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            editor: None,
            preview_file: default_preview_file(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NotesConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        write_atomic(&config_path, content.as_bytes())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "backend" => Ok(self.backend.to_string()),
            "editor" => Ok(self.editor.clone().unwrap_or_default()),
            "preview-file" => Ok(self.preview_file.clone()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key from its string form. An empty `editor` clears the override.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend" => self.backend = value.parse()?,
            "editor" => {
                let value = value.trim();
                self.editor = (!value.is_empty()).then(|| value.to_string());
            }
            "preview-file" => {
                let value = value.trim();
                let path = Path::new(value);
                let escapes_root = path
                    .components()
                    .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
                if value.is_empty() || path.is_absolute() || escapes_root {
                    return Err(NoteError::Config(
                        "preview-file must be a relative path inside the notes root".to_string(),
                    ));
                }
                self.preview_file = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> NoteError {
    NoteError::Config(format!(
        "Unknown config key '{}', expected one of: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
