use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::{self, SearchMode};
use crate::store::NoteStore;

pub fn run<S: NoteStore + ?Sized>(store: &S, mode: SearchMode, query: &str) -> Result<CmdResult> {
    let hits = search::search(store, mode, query)?;

    let mut result = CmdResult::default();
    if hits.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No notes found with {} containing '{}'",
            mode, query
        )));
    }
    Ok(result.with_listed_notes(hits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BackendKind;
    use crate::test_utils::TestEnv;

    #[test]
    fn lists_hits_without_message() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Flat);
        store.create("Grocery List", "buy milk").unwrap();

        let result = run(&store, SearchMode::Content, "milk").unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_result_is_reported_as_message() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Flat);
        store.create("Grocery List", "buy milk").unwrap();

        let result = run(&store, SearchMode::Title, "xyz").unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("title"));
    }
}
