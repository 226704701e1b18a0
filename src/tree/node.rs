//! Tree node types for directory snapshots

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single entry in a directory tree snapshot.
///
/// The two variants encode the file/directory distinction at the type level:
/// only files carry an extension, only directories carry children. The JSON
/// form tags each node with `"type": "file"` or `"type": "directory"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// A regular file.
    File {
        path: PathBuf,
        name: String,
        /// Byte size reported by the filesystem at build time.
        size: u64,
        /// Lower-cased extension including the leading dot; `None` when the
        /// file name has no extension.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extension: Option<String>,
    },
    /// A directory, with children in directory-listing order.
    Directory {
        path: PathBuf,
        name: String,
        /// Sum of the sizes of all retained descendant files.
        size: u64,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Path of the filesystem entry this node describes.
    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Directory { path, .. } => path,
        }
    }

    /// Base name (final path segment).
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Directory { name, .. } => name,
        }
    }

    /// Byte size: the file's own size, or the aggregated size of a
    /// directory's retained descendants.
    pub fn size(&self) -> u64 {
        match self {
            TreeNode::File { size, .. } => *size,
            TreeNode::Directory { size, .. } => *size,
        }
    }

    /// Lower-cased extension with leading dot. `None` for directories and
    /// for files without an extension.
    pub fn extension(&self) -> Option<&str> {
        match self {
            TreeNode::File { extension, .. } => extension.as_deref(),
            TreeNode::Directory { .. } => None,
        }
    }

    /// Child nodes in directory-listing order; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Directory { children, .. } => children,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TreeNode::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }
}
