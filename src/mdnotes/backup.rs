//! # Backups
//!
//! Snapshot-before-mutate for anything that overwrites existing note data.
//!
//! A backup is a byte copy of the file at `<path>.bak`, written next to the
//! original. Only one generation is kept: each backup replaces the previous
//! one. Callers must treat an `Err` from [`backup`] as a hard stop and not
//! proceed with the overwrite.

use crate::error::{NoteError, Result};
use crate::store::write_atomic;
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = ".bak";

/// Path of the backup that [`backup`] writes for `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copies the current bytes of `path` to its backup location.
///
/// Fails with [`NoteError::Backup`] if the source cannot be read or the copy
/// cannot be written.
pub fn backup(path: &Path) -> Result<PathBuf> {
    let target = backup_path(path);
    let bytes = fs::read(path).map_err(|source| NoteError::Backup {
        path: path.to_path_buf(),
        source,
    })?;

    write_atomic(&target, &bytes).map_err(|err| match err {
        NoteError::Io(source) => NoteError::Backup {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!("backed up {} to {}", path.display(), target.display());
    Ok(target)
}
