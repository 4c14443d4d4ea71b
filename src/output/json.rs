//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TreeNode;

/// Write tree node as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(node: &TreeNode, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, node).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(node, &mut lock)?;
    lock.flush()
}
