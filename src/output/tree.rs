//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which writes a complete `TreeNode`
//! tree with the same layout as `render_tree`, optionally with colors.

use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeNode, connector, format_size_suffix};

use super::config::OutputConfig;

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format the children of `node` to a plain string.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut buffer = Buffer::no_color();
        self.write(node, &mut buffer)
            .expect("writing to an in-memory buffer cannot fail");
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    /// Print the children of `node` to stdout, colored if enabled.
    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(node, &mut stdout)?;
        stdout.flush()
    }

    /// Write the children of `node` to `out`. The root itself is not printed.
    pub fn write<W: WriteColor>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        self.write_children(node.children(), out, "")
    }

    fn write_children<W: WriteColor>(
        &self,
        children: &[TreeNode],
        out: &mut W,
        prefix: &str,
    ) -> io::Result<()> {
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            write!(out, "{}{}", prefix, connector(i, children.len()))?;

            match child {
                TreeNode::File { name, size, .. } => {
                    writeln!(out, "{}{}", name, format_size_suffix(*size))?;
                }
                TreeNode::Dir { name, children, .. } => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    write!(out, "{}", name)?;
                    out.reset()?;
                    writeln!(out)?;

                    let new_prefix = if is_last {
                        format!("{}\t", prefix)
                    } else {
                        format!("{}│\t", prefix)
                    };
                    self.write_children(children, out, &new_prefix)?;
                }
            }
        }
        Ok(())
    }
}
