//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute.
///
/// # Example
/// ```ignore
/// resolve_against(Path::new("/site"), Path::new("docs")) -> "/site/docs"
/// resolve_against(Path::new("/site"), Path::new("/abs")) -> "/abs"
/// ```
#[inline]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Display `path` relative to `root`, falling back to the full path.
///
/// Always uses `/` as separator so log lines look the same on every platform.
pub fn relative_display(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
