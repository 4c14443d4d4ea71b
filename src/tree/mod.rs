//! Directory tree listing and rendering
//!
//! This module provides two ways to turn a directory into a tree:
//!
//! - `render_tree`: renders the text diagram straight from directory listings
//! - `TreeWalker`: builds a `TreeNode` tree in memory, for JSON and colored output

mod config;
mod json_types;
mod listing;
mod render;
mod utils;
mod walker;

pub use config::RenderConfig;
pub use json_types::TreeNode;
pub use listing::{DirectoryEntry, list_directory, sort_entries};
pub use render::{render_node, render_tree};
pub use utils::{child_indent, connector, format_size_suffix};
pub use walker::TreeWalker;
