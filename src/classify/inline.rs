//! Rewriting markdown image references as base64 data URIs.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::model::{mime_type_for, ImageReference};
use crate::source::{ContentSource, FsSource};

/// `![alt](target)`, lazy on both groups.
fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"))
}

/// Find every image reference in `text`, left to right.
pub fn find_image_references(text: &str) -> Vec<ImageReference> {
    image_pattern()
        .captures_iter(text)
        .map(|caps| ImageReference::new(&caps[1], &caps[2]))
        .collect()
}

/// Inline images in `text` from the filesystem.
pub fn inline_images(text: &str, base_dir: impl AsRef<Path>) -> String {
    ImageInliner::new().inline(text, base_dir.as_ref())
}

/// Replaces relative image targets with data URIs.
///
/// A reference whose file cannot be read is left exactly as written; the
/// rest of the text is still processed.
#[derive(Debug, Clone)]
pub struct ImageInliner {
    source: Arc<dyn ContentSource>,
}

impl ImageInliner {
    /// Create an inliner reading from the filesystem.
    pub fn new() -> Self {
        Self::with_source(Arc::new(FsSource))
    }

    /// Create an inliner reading from `source`.
    pub fn with_source(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Rewrite all image references in `text` relative to `base_dir`.
    pub fn inline(&self, text: &str, base_dir: &Path) -> String {
        image_pattern()
            .replace_all(text, |caps: &Captures| {
                let image = ImageReference::new(&caps[1], &caps[2]);
                if image.is_external() {
                    return caps[0].to_string();
                }

                match self.data_uri(&image, base_dir) {
                    Ok(uri) => format!("![{}]({})", image.alt_text, uri),
                    Err(e) => {
                        log::debug!("Leaving image reference unchanged: {}", e);
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Read an image and encode it as a data URI.
    pub fn data_uri(&self, image: &ImageReference, base_dir: &Path) -> Result<String> {
        let path = image.resolve(base_dir);
        let data = self
            .source
            .read_bytes(&path)
            .map_err(|e| Error::content_read(&path, e))?;

        Ok(format!(
            "data:{};base64,{}",
            mime_type_for(&path),
            STANDARD.encode(&data)
        ))
    }
}

impl Default for ImageInliner {
    fn default() -> Self {
        Self::new()
    }
}
