use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identity;
use crate::store::NoteStore;

pub fn run<S: NoteStore + ?Sized>(store: &mut S, title: &str, content: &str) -> Result<CmdResult> {
    let identifier = store.create(title, content)?;

    let mut result = CmdResult::default().with_affected(identifier.clone());
    let base = identity::base_name(title.trim());
    if identifier != base {
        result.add_message(CmdMessage::warning(format!(
            "A note named '{}' already exists; saved as '{}' (find it with list or search)",
            base, identifier
        )));
    }
    result.add_message(CmdMessage::success(format!("Note saved: {}", identifier)));
    Ok(result)
}
