//! dirtree - print a directory as a box-drawing tree with file sizes

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, TreeFormatter, print_json, write_json};
pub use tree::{
    DirectoryEntry, RenderConfig, TreeNode, TreeWalker, list_directory, render_node, render_tree,
};
