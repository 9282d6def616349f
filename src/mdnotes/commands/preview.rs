use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::{write_preview, Renderer};
use crate::store::NoteStore;
use std::path::Path;

/// Renders a note into a standalone HTML file at `target`.
pub fn run<S, R>(store: &S, renderer: &R, title: &str, target: &Path) -> Result<CmdResult>
where
    S: NoteStore + ?Sized,
    R: Renderer + ?Sized,
{
    let content = store.read(title)?;
    write_preview(renderer, title.trim(), &content, target)?;

    let mut result = CmdResult::default().with_paths(vec![target.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Preview written to {}",
        target.display()
    )));
    Ok(result)
}
