//! Shared glyph and label helpers used by every output mode

use tracing::debug;

use super::config::RenderConfig;

/// Connector drawn before an entry that has more siblings after it.
pub const BRANCH: &str = "├───";
/// Connector drawn before the last entry among its siblings.
pub const LAST_BRANCH: &str = "└───";
/// Indent segment for a level where more siblings follow.
pub const CONTINUATION: &str = "│\t";
/// Indent segment for a level whose last sibling has been reached.
pub const GAP: &str = "\t";

/// Connector glyph for an entry at `index` among `len` siblings.
pub fn connector(index: usize, len: usize) -> &'static str {
    if index + 1 == len { LAST_BRANCH } else { BRANCH }
}

/// Indent passed to the child at `index` among `len` siblings.
pub fn child_indent(prefix: &str, index: usize, len: usize) -> String {
    let segment = if index + 1 == len { GAP } else { CONTINUATION };
    format!("{}{}", prefix, segment)
}

/// Label appended after a file name: ` (empty)` or ` (<N>b)`.
pub fn format_size_suffix(bytes: u64) -> String {
    if bytes == 0 {
        " (empty)".to_string()
    } else {
        format!(" ({}b)", bytes)
    }
}

/// Run `f` on a pool sized by `parallel_workers`.
pub(crate) fn with_workers<T: Send>(config: &RenderConfig, f: impl FnOnce() -> T + Send) -> T {
    if config.parallel_workers <= 1 {
        return f();
    }
    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallel_workers)
        .build()
    {
        Ok(pool) => pool.install(f),
        Err(e) => {
            // Fall back to rayon's global pool
            debug!(error = %e, "could not build worker pool");
            f()
        }
    }
}
