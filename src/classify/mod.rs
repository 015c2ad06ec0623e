//! Content classification and image inlining.
//!
//! Each section is classified as one of four payloads, checked in order
//! against the trimmed content:
//!
//! 1. `<iframe ...></iframe>` → [`ClassifiedContent::Iframe`]
//! 2. `./file.md` → [`ClassifiedContent::ExternalMarkdownFile`]
//! 3. `![alt](./image.png)` → [`ClassifiedContent::LocalImage`]
//! 4. anything else → [`ClassifiedContent::PlainText`]
//!
//! Text payloads have their `![alt](path)` references rewritten as base64
//! data URIs by the [`ImageInliner`].
//!
//! [`ClassifiedContent::Iframe`]: crate::model::ClassifiedContent::Iframe
//! [`ClassifiedContent::ExternalMarkdownFile`]: crate::model::ClassifiedContent::ExternalMarkdownFile
//! [`ClassifiedContent::LocalImage`]: crate::model::ClassifiedContent::LocalImage
//! [`ClassifiedContent::PlainText`]: crate::model::ClassifiedContent::PlainText

mod classifier;
mod inline;
mod options;

pub use classifier::{classify, ContentClassifier, FONT_KEY};
pub use inline::{find_image_references, inline_images, ImageInliner};
pub use options::{ClassifyOptions, FontSizes};
