use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

/// Replaces a note's body. The previous body is backed up first.
pub fn run<S: NoteStore + ?Sized>(store: &mut S, title: &str, content: &str) -> Result<CmdResult> {
    let updated = store.update(title, content)?;

    let mut result = CmdResult::default().with_affected(updated.identifier.clone());
    result.add_message(CmdMessage::success(format!(
        "The note '{}' has been updated",
        updated.identifier
    )));
    result.add_message(CmdMessage::info(format!(
        "Previous version saved to {}",
        updated.backup.display()
    )));
    Ok(result)
}
