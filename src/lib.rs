//! Dirtree: Asynchronous Directory Tree Snapshots
//!
//! Builds an in-memory tree describing every file and directory beneath a
//! path, annotated with size, type, and extension. Directory sizes aggregate
//! the sizes of all retained descendant files; sibling subtrees are expanded
//! concurrently on the async runtime.

pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::{BuildOptions, TreeBuilder, TreeNode};
