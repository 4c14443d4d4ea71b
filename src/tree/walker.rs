//! TreeWalker - builds the full tree in memory for JSON and colored output

use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;

use super::config::RenderConfig;
use super::json_types::TreeNode;
use super::listing::{DirectoryEntry, list_directory};
use super::utils::with_workers;

/// Tree walker that builds the full tree in memory.
/// Ordering, filtering, error handling and use of `parallel_workers` match
/// `render_tree`.
pub struct TreeWalker {
    config: RenderConfig,
}

impl TreeWalker {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Walk `root`. Fails only if `root` itself cannot be listed.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let entries = list_directory(root, self.config.include_files)?;

        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        Ok(TreeNode::Dir {
            name,
            path: root.to_path_buf(),
            children: with_workers(&self.config, || self.walk_entries(root, entries)),
        })
    }

    fn walk_entries(&self, parent: &Path, entries: Vec<DirectoryEntry>) -> Vec<TreeNode> {
        if self.config.is_parallel() {
            entries
                .into_par_iter()
                .map(|entry| self.walk_entry(parent, entry))
                .collect()
        } else {
            entries
                .into_iter()
                .map(|entry| self.walk_entry(parent, entry))
                .collect()
        }
    }

    fn walk_entry(&self, parent: &Path, entry: DirectoryEntry) -> TreeNode {
        let path = parent.join(&entry.file_name);
        let name = entry.name().into_owned();
        if !entry.is_dir {
            return TreeNode::File {
                name,
                path,
                size: entry.size,
            };
        }

        let entries = list_directory(&path, self.config.include_files).unwrap_or_else(|e| {
            debug!(error = %e, "skipping unreadable directory");
            Vec::new()
        });
        let children = self.walk_entries(&path, entries);

        TreeNode::Dir {
            name,
            path,
            children,
        }
    }
}
