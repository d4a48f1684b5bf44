//! Output configuration types

use crate::listing::ListOptions;

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// One detailed line per entry instead of a compact listing.
    pub long_format: bool,
}

impl OutputConfig {
    /// Uncoloured output in the layout selected by `options`.
    pub fn plain(options: &ListOptions) -> Self {
        Self {
            use_color: false,
            long_format: options.long_format,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }
}
