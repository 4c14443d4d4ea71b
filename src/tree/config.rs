//! Configuration types for tree rendering

/// Configuration for listing and rendering behavior.
///
/// Passed explicitly to every listing and rendering call.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Show regular files as leaves. When false only directories are listed.
    pub include_files: bool,
    /// Number of parallel workers for subtree rendering.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl RenderConfig {
    pub fn new(include_files: bool) -> Self {
        Self {
            include_files,
            ..Default::default()
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel_workers != 1
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_files: false,
            parallel_workers: 1,
        }
    }
}
