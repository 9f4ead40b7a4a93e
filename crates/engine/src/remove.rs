// crates/engine/src/remove.rs
//! Fail-fast subtree removal.
//!
//! Children are removed before their parent, in name order. The first failure
//! aborts the whole removal and is returned as-is; whatever was already
//! removed stays removed.

use std::fs::{self, DirEntry, FileType};
use std::path::Path;

use crate::error::RemoveError;

fn remove_error(path: &Path) -> impl FnOnce(std::io::Error) -> RemoveError + '_ {
    move |source| RemoveError {
        path: path.to_path_buf(),
        source,
    }
}

/// Remove `dir` and everything beneath it. Symlinks are unlinked, never followed.
///
/// # Errors
/// Returns the first entry that could not be listed or removed.
pub fn remove_subtree(dir: &Path) -> Result<(), RemoveError> {
    let mut entries = fs::read_dir(dir)
        .map_err(remove_error(dir))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(remove_error(dir))?;
    // 名前順に削除し、失敗時にどこまで消えたかを一定にする
    entries.sort_by_key(DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        // DirEntry::file_type は symlink を辿らない
        let file_type = entry.file_type().map_err(remove_error(&path))?;

        if file_type.is_dir() {
            remove_subtree(&path)?;
        } else {
            remove_leaf(&path, file_type)?;
        }
    }

    fs::remove_dir(dir).map_err(remove_error(dir))
}

/// Unlink a non-directory entry.
///
/// # Errors
/// Returns the underlying I/O error wrapped with the path.
pub fn remove_leaf(path: &Path, file_type: FileType) -> Result<(), RemoveError> {
    #[cfg(windows)]
    {
        use std::os::windows::fs::FileTypeExt;
        if file_type.is_symlink_dir() {
            return fs::remove_dir(path).map_err(remove_error(path));
        }
    }
    #[cfg(not(windows))]
    let _ = file_type;

    fs::remove_file(path).map_err(remove_error(path))
}
