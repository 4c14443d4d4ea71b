//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Buffered tree formatter, plain or colored
//! - `json` - JSON output

mod config;
mod json;
mod tree;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use tree::TreeFormatter;
