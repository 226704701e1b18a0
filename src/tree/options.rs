//! Build configuration

use regex::Regex;

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Rewrite backslashes to forward slashes in every path before
    /// processing. Child paths composed from a normalized parent inherit the
    /// normalization.
    pub normalize_path: bool,
    /// Patterns matched against the full (possibly normalized) path. Any
    /// match drops the entry and its entire subtree; an excluded directory is
    /// never listed.
    pub exclude: Vec<Regex>,
    /// Pattern matched against the lower-cased file extension, leading dot
    /// included (files without an extension match against the empty string).
    /// Applies only to files; directories are never extension-filtered.
    pub extensions: Option<Regex>,
    /// Whether metadata reads follow symbolic links (default: true, so
    /// symlinked files and directories appear as their targets). When false,
    /// symlinks classify as neither file nor directory and are dropped.
    pub follow_symlinks: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            normalize_path: false,
            exclude: Vec::new(),
            extensions: None,
            follow_symlinks: true,
        }
    }
}
