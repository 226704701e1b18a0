//! Path helpers for tree construction

use std::path::{Component, Path, PathBuf};

/// Final path segment of `path`, taken from the path as supplied.
///
/// `.` and `..` name themselves; empty for paths without a final segment
/// (e.g. `/`).
pub fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    }
}

/// Lower-cased extension of `path`, including the leading dot.
///
/// `None` when the file name has no extension (dotfiles like `.gitignore`
/// count as extensionless).
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Rewrite backslash separators to forward slashes (unix style).
pub fn normalize_separators(path: &Path) -> PathBuf {
    PathBuf::from(path.to_string_lossy().replace('\\', "/"))
}
