//! Filesystem primitives for include traversal.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Lists the immediate children of `dir`, sorted by path.
///
/// Returns `None` when the directory cannot be listed; the traversal
/// treats such a directory as contributing no sources.
pub(crate) fn list_children_sorted(dir: &Path) -> Option<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).ok()?;
    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    children.sort();
    Some(children)
}

/// Absolutizes `path` and collapses `.` and `..` components lexically,
/// without touching the filesystem, so paths that do not exist still
/// normalize for error messages.
pub(crate) fn normalized_absolute(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
