//! Classified section content and image references.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Content of one section after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifiedContent {
    /// Embedded iframe
    Iframe {
        /// Value of the `src` attribute
        url: String,
    },

    /// External markdown file, images inlined
    ExternalMarkdownFile {
        /// Resolved path of the file
        path: PathBuf,
        /// File text with image references rewritten
        text: String,
        /// Font size to render with
        font_size: u32,
    },

    /// Single local image rendered as a file reference
    LocalImage {
        /// Alternative text
        alt: String,
        /// Image path resolved against the base directory
        path: PathBuf,
    },

    /// Markdown text, images inlined
    PlainText {
        /// Text with image references rewritten
        text: String,
        /// Font size to render with
        font_size: u32,
    },
}

impl ClassifiedContent {
    /// Create a plain text payload.
    pub fn plain(text: impl Into<String>, font_size: u32) -> Self {
        ClassifiedContent::PlainText {
            text: text.into(),
            font_size,
        }
    }

    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifiedContent::Iframe { .. } => "iframe",
            ClassifiedContent::ExternalMarkdownFile { .. } => "external_markdown_file",
            ClassifiedContent::LocalImage { .. } => "local_image",
            ClassifiedContent::PlainText { .. } => "plain_text",
        }
    }

    /// Markdown text carried by the payload, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            ClassifiedContent::ExternalMarkdownFile { text, .. }
            | ClassifiedContent::PlainText { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Font size carried by the payload, if any.
    pub fn font_size(&self) -> Option<u32> {
        match self {
            ClassifiedContent::ExternalMarkdownFile { font_size, .. }
            | ClassifiedContent::PlainText { font_size, .. } => Some(*font_size),
            _ => None,
        }
    }
}

/// A markdown image reference `![alt](target)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Alternative text
    pub alt_text: String,

    /// Image target (path, URL or data URI)
    pub target: String,
}

impl ImageReference {
    /// Create a new image reference.
    pub fn new(alt_text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alt_text: alt_text.into(),
            target: target.into(),
        }
    }

    /// Check if the target is already a data URI.
    pub fn is_embedded(&self) -> bool {
        self.target.starts_with("data:")
    }

    /// Check if the target is left as-is (data URI or URL).
    pub fn is_external(&self) -> bool {
        self.is_embedded() || self.target.starts_with("http")
    }

    /// Resolve the target against a base directory.
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.target)
    }

    /// Render back to markdown syntax.
    pub fn to_markdown(&self) -> String {
        format!("![{}]({})", self.alt_text, self.target)
    }
}

/// Get the image MIME type from a file extension.
///
/// Unknown or missing extensions fall back to `image/png`.
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}
