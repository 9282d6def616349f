use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

/// The file backing the note a title resolves to.
pub fn run<S: NoteStore + ?Sized>(store: &S, title: &str) -> Result<CmdResult> {
    let path = store.location(title)?;
    Ok(CmdResult::default().with_paths(vec![path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BackendKind;
    use crate::test_utils::TestEnv;

    #[test]
    fn flat_note_path_is_its_file() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Flat);
        store.create("Plan", "x").unwrap();

        let result = run(&store, "Plan").unwrap();
        assert_eq!(result.paths, vec![env.root.join("notes").join("Plan.md")]);
    }

    #[test]
    fn aggregate_note_path_is_the_document() {
        let env = TestEnv::new();
        let mut store = env.store(BackendKind::Aggregate);
        store.create("Plan", "x").unwrap();

        let result = run(&store, "Plan").unwrap();
        assert_eq!(result.paths, vec![env.root.join("notes.json")]);
    }
}
