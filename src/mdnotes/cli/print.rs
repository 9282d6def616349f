use super::styles::{DIVIDER, ERROR, INDEX, INFO, SUCCESS, TITLE, WARNING};
use mdnotes::api::{CmdMessage, MessageLevel, ViewedNote};
use mdnotes::config::NotesConfig;
use mdnotes::model::NoteEntry;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 80;
const DIVIDER_WIDTH: usize = 40;

pub(super) fn print_messages(out: &mut dyn Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*INFO,
            MessageLevel::Success => &*SUCCESS,
            MessageLevel::Warning => &*WARNING,
            MessageLevel::Error => &*ERROR,
        };
        writeln!(out, "{}", style.apply_to(&message.content))?;
    }
    Ok(())
}

pub(super) fn print_error(out: &mut dyn Write, error: &dyn std::fmt::Display) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(error.to_string())])
}

pub(super) fn print_notes(out: &mut dyn Write, notes: &[NoteEntry]) -> io::Result<()> {
    if notes.is_empty() {
        writeln!(out, "No notes found.")?;
        return Ok(());
    }

    let index_width = notes.len().to_string().len();
    for (i, note) in notes.iter().enumerate() {
        let index = format!("{:>width$}.", i + 1, width = index_width);
        let room = LINE_WIDTH.saturating_sub(index.len() + 1);
        let mut line = note.identifier.clone();
        if note.title != note.identifier {
            line = format!("{}  ({})", line, note.title);
        }
        writeln!(
            out,
            "{} {}",
            INDEX.apply_to(index),
            truncate_to_width(&line, room)
        )?;
    }
    Ok(())
}

pub(super) fn print_viewed(out: &mut dyn Write, viewed: &ViewedNote) -> io::Result<()> {
    let header = format!("---- {} ----", viewed.title);
    writeln!(out, "{}", TITLE.apply_to(header))?;
    writeln!(out)?;
    writeln!(out, "{}", viewed.body)?;
    writeln!(out)?;
    writeln!(out, "{}", DIVIDER.apply_to("-".repeat(DIVIDER_WIDTH)))?;
    Ok(())
}

pub(super) fn print_paths(out: &mut dyn Write, paths: &[PathBuf]) -> io::Result<()> {
    for path in paths {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

pub(super) fn print_config(out: &mut dyn Write, config: &NotesConfig) -> io::Result<()> {
    writeln!(out, "backend = {}", config.backend)?;
    writeln!(
        out,
        "editor = {}",
        config.editor.as_deref().unwrap_or("(from $EDITOR)")
    )?;
    writeln!(out, "preview-file = {}", config.preview_file)?;
    Ok(())
}

/// Cuts `s` to at most `max_width` columns, marking the cut with an ellipsis.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(truncate_to_width("Plan", 4), "Plan");
    }

    #[test]
    fn long_lines_get_ellipsis() {
        assert_eq!(truncate_to_width("Meeting_Notes", 8), "Meeting…");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(truncate_to_width("日本語メモ", 5), "日本…");
    }

    #[test]
    fn lists_with_one_based_index() {
        let mut out = Vec::new();
        print_notes(
            &mut out,
            &[NoteEntry::bare("Plan"), NoteEntry::new("Plan_1", "Plan!!")],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Plan"));
        assert!(text.contains("Plan_1  (Plan!!)"));
    }

    #[test]
    fn empty_listing_says_so() {
        let mut out = Vec::new();
        print_notes(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No notes found.\n");
    }
}
