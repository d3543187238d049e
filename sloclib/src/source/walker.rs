//! File discovery.
//!
//! Walks a path and yields every regular file under it. Entries below the
//! root whose name starts with `.` are pruned, files and directories alike.
//! Anything that cannot be read or stat'ed is skipped with a `debug` record
//! and the walk carries on.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Whether a non-root entry is hidden (`.git`, `.env`, ...).
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Regular files at or below `root`, in file-name order.
///
/// The root itself is never pruned, so `.` or an explicitly named dotfile
/// is still counted. Symlinks are followed; a `root` that does not exist
/// yields nothing.
pub fn walk_files(root: impl AsRef<Path>) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(DirEntry::into_path)
}
