//! Tree builder for constructing directory snapshots

use crate::error::TreeError;
use crate::tree::node::TreeNode;
use crate::tree::options::BuildOptions;
use crate::tree::path;
use futures::future::{self, BoxFuture, FutureExt};
use std::ffi::OsString;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tracing::{debug, error, info, instrument, trace};

/// Callback invoked once per retained file node, with the node and its path.
pub type FileCallback = dyn Fn(&TreeNode, &Path) + Send + Sync;

/// Tree builder for constructing directory snapshots.
///
/// Walks the filesystem from a root path and materializes one immutable
/// [`TreeNode`] tree per [`build`](TreeBuilder::build) call. Every metadata
/// read and directory listing is asynchronous; the children of each directory
/// are expanded concurrently.
pub struct TreeBuilder {
    root: PathBuf,
    options: BuildOptions,
    on_file: Option<Box<FileCallback>>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            options: BuildOptions::default(),
            on_file: None,
        }
    }

    /// Set build options (exclude patterns, extension filter, etc.).
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a callback invoked once per retained file node, after the
    /// exclusion and extension checks pass and before the node is handed to
    /// its parent. Invocation order follows leaf resolution order, which is
    /// not necessarily listing order since sibling subtrees resolve
    /// concurrently.
    pub fn on_file<F>(mut self, callback: F) -> Self
    where
        F: Fn(&TreeNode, &Path) + Send + Sync + 'static,
    {
        self.on_file = Some(Box::new(callback));
        self
    }

    /// Build the snapshot.
    ///
    /// Resolves to `Ok(None)` when the root itself is excluded, filtered out
    /// by the extension pattern, or is neither a regular file nor a directory
    /// (sockets, devices, FIFOs). Any metadata or listing failure anywhere in
    /// the subtree fails the whole build; there is no partial tree.
    ///
    /// Fan-out is unbounded: a directory with N entries issues N concurrent
    /// subtree builds. Directories with very large fan-out can exhaust file
    /// descriptors; callers needing a cap should gate calls themselves.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub async fn build(&self) -> Result<Option<TreeNode>, TreeError> {
        let start = Instant::now();
        info!("Starting tree build");

        let tree = match self.build_node(self.root.clone()).await {
            Ok(tree) => tree,
            Err(e) => {
                error!("Tree build failed: {}", e);
                return Err(e);
            }
        };

        let duration = start.elapsed();
        match &tree {
            Some(root) => info!(
                total_size = root.size(),
                child_count = root.children().len(),
                duration_ms = duration.as_millis(),
                "Tree build completed"
            ),
            None => info!(
                duration_ms = duration.as_millis(),
                "Tree build resolved to no node"
            ),
        }

        Ok(tree)
    }

    /// Recursively build the node for one path.
    ///
    /// `Ok(None)` marks a filtered-out or special entry; the parent omits it
    /// from `children`. The name is derived from the path as supplied, before
    /// separator normalization.
    fn build_node(&self, path: PathBuf) -> BoxFuture<'_, Result<Option<TreeNode>, TreeError>> {
        async move {
            let name = path::base_name(&path);
            let path = if self.options.normalize_path {
                path::normalize_separators(&path)
            } else {
                path
            };

            let metadata = self.read_metadata(&path).await?;

            // Exclusion fires before the file/directory distinction, so an
            // excluded directory is never listed.
            if self.is_excluded(&path) {
                trace!(path = %path.display(), "Excluded by pattern");
                return Ok(None);
            }

            if metadata.is_file() {
                let extension = path::file_extension(&path);
                if let Some(pattern) = &self.options.extensions {
                    if !pattern.is_match(extension.as_deref().unwrap_or("")) {
                        trace!(path = %path.display(), "Dropped by extension filter");
                        return Ok(None);
                    }
                }

                let node = TreeNode::File {
                    path: path.clone(),
                    name,
                    size: metadata.len(),
                    extension,
                };

                if let Some(callback) = &self.on_file {
                    callback(&node, &path);
                }

                Ok(Some(node))
            } else if metadata.is_dir() {
                let entries = self.list_dir(&path).await?;
                debug!(path = %path.display(), entry_count = entries.len(), "Listed directory");

                // Fan out over all children at once; the index-aligned join
                // keeps `children` in listing order even though siblings
                // complete in arbitrary order. The first failure fails the
                // join and drops the remaining sibling futures.
                let subtrees = future::try_join_all(
                    entries
                        .into_iter()
                        .map(|entry| self.build_node(path.join(entry))),
                )
                .await?;

                let children: Vec<TreeNode> = subtrees.into_iter().flatten().collect();
                let size: u64 = children.iter().map(TreeNode::size).sum();

                Ok(Some(TreeNode::Directory {
                    path,
                    name,
                    size,
                    children,
                }))
            } else {
                trace!(path = %path.display(), "Skipping special file type");
                Ok(None)
            }
        }
        .boxed()
    }

    /// Read metadata for a path, following symlinks per the options.
    async fn read_metadata(&self, path: &Path) -> Result<Metadata, TreeError> {
        let result = if self.options.follow_symlinks {
            fs::metadata(path).await
        } else {
            fs::symlink_metadata(path).await
        };

        result.map_err(|source| TreeError::Metadata {
            path: path.to_path_buf(),
            source,
        })
    }

    /// List the immediate entry names of a directory, in listing order.
    async fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, TreeError> {
        let to_error = |source| TreeError::ListDir {
            path: path.to_path_buf(),
            source,
        };

        let mut dir = fs::read_dir(path).await.map_err(to_error)?;
        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(to_error)? {
            entries.push(entry.file_name());
        }

        Ok(entries)
    }

    /// Whether the path matches any exclude pattern.
    fn is_excluded(&self, path: &Path) -> bool {
        if self.options.exclude.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy();
        self.options
            .exclude
            .iter()
            .any(|pattern| pattern.is_match(&path_str))
    }
}
