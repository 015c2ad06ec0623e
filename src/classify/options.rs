//! Classification options and configuration.

use serde::{Deserialize, Serialize};

/// Options for classifying section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyOptions {
    /// Font sizes for text payloads
    pub font_sizes: FontSizes,

    /// Classify the sections of a slide in parallel
    pub parallel: bool,
}

impl ClassifyOptions {
    /// Create new classify options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font sizes.
    pub fn with_font_sizes(mut self, font_sizes: FontSizes) -> Self {
        self.font_sizes = font_sizes;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            font_sizes: FontSizes::default(),
            parallel: true,
        }
    }
}

/// Font sizes used for text payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    /// Plain text
    pub default: u32,

    /// Plain text in a section with `font <- small`
    pub small: u32,

    /// External markdown files
    pub external: u32,

    /// Error placeholders
    pub error: u32,
}

impl FontSizes {
    /// Set the default size.
    pub fn with_default(mut self, size: u32) -> Self {
        self.default = size;
        self
    }

    /// Set the small size.
    pub fn with_small(mut self, size: u32) -> Self {
        self.small = size;
        self
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            default: 28,
            small: 20,
            external: 16,
            error: 28,
        }
    }
}
