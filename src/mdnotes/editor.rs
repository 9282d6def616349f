use crate::error::{NoteError, Result};
use log::debug;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

const FALLBACK_EDITORS: &[&str] = &["nano", "vim", "vi"];

/// First non-empty of the configured editor, `$EDITOR`, `$VISUAL`.
fn pick_editor(
    configured: Option<&str>,
    editor_var: Option<String>,
    visual_var: Option<String>,
) -> Option<String> {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(editor_var)
        .chain(visual_var)
        .find(|e| !e.trim().is_empty())
}

/// Gets the editor command.
/// Checks the configured override, then $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor(configured: Option<&str>) -> Result<String> {
    let chosen = pick_editor(configured, env::var("EDITOR").ok(), env::var("VISUAL").ok());
    if let Some(editor) = chosen {
        return Ok(editor);
    }

    for fallback in FALLBACK_EDITORS {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(NoteError::Editor(
        "No editor found. Set $EDITOR or the 'editor' config key.".to_string(),
    ))
}

/// Opens a file in `editor` and waits for it to close.
/// `editor` may carry arguments, e.g. `code --wait`.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| NoteError::Editor("Empty editor command".to_string()))?;
    let path = file_path.as_ref();

    debug!("launching '{}' on {}", editor, path.display());
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| NoteError::Editor(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(NoteError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}

/// Round-trips `initial` through the editor via a temp file and returns the result.
pub fn edit_text(editor: &str, initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!("mdnotes-edit-{}.md", Uuid::new_v4()));
    fs::write(&temp_file, initial)?;

    let outcome = open_in_editor(editor, &temp_file)
        .and_then(|_| fs::read_to_string(&temp_file).map_err(NoteError::Io));

    let _ = fs::remove_file(&temp_file);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        let picked = pick_editor(Some("hx"), Some("vim".into()), Some("code".into()));
        assert_eq!(picked.as_deref(), Some("hx"));
    }

    #[test]
    fn falls_through_blank_values() {
        let picked = pick_editor(Some("  "), Some(String::new()), Some("code".into()));
        assert_eq!(picked.as_deref(), Some("code"));
    }

    #[test]
    fn nothing_set_picks_nothing() {
        assert_eq!(pick_editor(None, None, None), None);
    }

    #[test]
    fn empty_command_is_rejected() {
        let err = open_in_editor("   ", "whatever.md").unwrap_err();
        assert!(matches!(err, NoteError::Editor(_)));
    }

    #[cfg(unix)]
    #[test]
    fn edit_text_returns_file_after_editor_exits() {
        // `true` leaves the file alone and exits 0.
        assert_eq!(edit_text("true", "unchanged body").unwrap(), "unchanged body");
    }

    #[cfg(unix)]
    #[test]
    fn edit_text_reports_failing_editor() {
        let err = edit_text("false", "body").unwrap_err();
        assert!(matches!(err, NoteError::Editor(_)));
    }

    #[test]
    fn missing_editor_binary_is_reported() {
        let err = edit_text("definitely-not-an-editor-binary", "body").unwrap_err();
        assert!(matches!(err, NoteError::Editor(_)));
    }
}
