use crate::model::BackendKind;
use crate::store::{self, NoteStore, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory lives until the test is done
    pub _temp_dir: TempDir,
    pub config: StoreConfig,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            config: StoreConfig::new(root.clone()),
            root,
        }
    }

    /// A fresh handle on the backend rooted in this environment.
    pub fn store(&self, kind: BackendKind) -> Box<dyn NoteStore> {
        store::open(kind, &self.config).expect("failed to open store")
    }
}
