//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Highlight directory names. Off by default so output stays plain text.
    pub use_color: bool,
}
