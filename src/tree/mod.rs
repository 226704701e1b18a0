//! Asynchronous directory tree construction
//!
//! Represents a directory subtree as an immutable in-memory snapshot, where
//! each node (file or directory) carries its path, size, and children.

mod builder;
mod node;
mod options;
mod path;

pub use builder::TreeBuilder;
pub use node::TreeNode;
pub use options::BuildOptions;
