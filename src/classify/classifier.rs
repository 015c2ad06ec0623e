//! Section content classification.

use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::{ClassifyOptions, ImageInliner};
use crate::error::{Error, Result};
use crate::model::{ClassifiedContent, Section};
use crate::source::{ContentSource, FsSource};

/// Metadata key selecting the font size of plain text.
pub const FONT_KEY: &str = "font";

const LOCAL_IMAGE_MARKER: &str = "](./";

fn iframe_src_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?:^|\s)src="([^"]+)""#).expect("valid src pattern"))
}

/// Decides what a section's content is and prepares its payload.
///
/// Classification is total: every input produces exactly one
/// [`ClassifiedContent`]. Unreadable files and malformed iframes become
/// plain-text error placeholders.
#[derive(Debug, Clone)]
pub struct ContentClassifier {
    source: Arc<dyn ContentSource>,
    inliner: ImageInliner,
    options: ClassifyOptions,
}

impl ContentClassifier {
    /// Create a classifier reading from the filesystem.
    pub fn new(options: ClassifyOptions) -> Self {
        Self::with_source(Arc::new(FsSource), options)
    }

    /// Create a classifier reading from `source`.
    pub fn with_source(source: Arc<dyn ContentSource>, options: ClassifyOptions) -> Self {
        Self {
            inliner: ImageInliner::with_source(source.clone()),
            source,
            options,
        }
    }

    /// Get the classify options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Get the image inliner sharing this classifier's source.
    pub fn inliner(&self) -> &ImageInliner {
        &self.inliner
    }

    /// Classify a section.
    pub fn classify(&self, section: &Section, base_dir: &Path) -> ClassifiedContent {
        self.classify_content(&section.content, &section.metadata, base_dir)
    }

    /// Classify sections in order, in parallel when enabled.
    pub fn classify_all(&self, sections: &[Section], base_dir: &Path) -> Vec<ClassifiedContent> {
        if self.options.parallel && sections.len() > 1 {
            use rayon::prelude::*;
            sections
                .par_iter()
                .map(|section| self.classify(section, base_dir))
                .collect()
        } else {
            sections
                .iter()
                .map(|section| self.classify(section, base_dir))
                .collect()
        }
    }

    /// Classify raw content with its metadata.
    pub fn classify_content(
        &self,
        content: &str,
        metadata: &HashMap<String, String>,
        base_dir: &Path,
    ) -> ClassifiedContent {
        let trimmed = content.trim();

        if is_iframe(trimmed) {
            return match iframe_src(trimmed) {
                Ok(url) => ClassifiedContent::Iframe { url },
                Err(e) => {
                    log::warn!("{}", e);
                    self.placeholder("Error: Invalid iframe tag - no src attribute found")
                }
            };
        }

        if is_markdown_path(trimmed) {
            return match self.load_markdown(trimmed, base_dir) {
                Ok(content) => content,
                Err(e) => {
                    log::warn!("{}", e);
                    let message = if e.is_not_found() {
                        format!("Error: File not found: {}", trimmed)
                    } else {
                        format!("Error loading markdown file: {}", e)
                    };
                    self.placeholder(message)
                }
            };
        }

        if let Some((alt, rel)) = split_local_image(trimmed) {
            return ClassifiedContent::LocalImage {
                alt: alt.to_string(),
                path: base_dir.join(rel),
            };
        }

        let font_size = match metadata.get(FONT_KEY).map(String::as_str) {
            Some("small") => self.options.font_sizes.small,
            _ => self.options.font_sizes.default,
        };

        ClassifiedContent::PlainText {
            text: self.inliner.inline(content, base_dir),
            font_size,
        }
    }

    fn load_markdown(&self, rel: &str, base_dir: &Path) -> Result<ClassifiedContent> {
        let path = base_dir.join(rel);
        let text = self
            .source
            .read_text(&path)
            .map_err(|e| Error::content_read(&path, e))?;

        let file_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        log::debug!("Loaded {} ({} bytes)", path.display(), text.len());

        Ok(ClassifiedContent::ExternalMarkdownFile {
            text: self.inliner.inline(&text, &file_dir),
            font_size: self.options.font_sizes.external,
            path,
        })
    }

    fn placeholder(&self, message: impl Into<String>) -> ClassifiedContent {
        ClassifiedContent::plain(message, self.options.font_sizes.error)
    }
}

impl Default for ContentClassifier {
    fn default() -> Self {
        Self::new(ClassifyOptions::default())
    }
}

/// Classify a section against the filesystem with default options.
pub fn classify(section: &Section, base_dir: impl AsRef<Path>) -> ClassifiedContent {
    ContentClassifier::default().classify(section, base_dir.as_ref())
}

fn is_iframe(trimmed: &str) -> bool {
    trimmed.starts_with("<iframe") && trimmed.ends_with("</iframe>")
}

fn iframe_src(tag: &str) -> Result<String> {
    iframe_src_pattern()
        .captures(tag)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::MalformedDirective("iframe tag has no src attribute".into()))
}

fn is_markdown_path(trimmed: &str) -> bool {
    trimmed.starts_with("./") && trimmed.ends_with(".md")
}

/// Split `![alt](./path)` into alt text and path (without `./`).
fn split_local_image(trimmed: &str) -> Option<(&str, &str)> {
    if !trimmed.starts_with("![") || !trimmed.ends_with(')') {
        return None;
    }
    let marker = trimmed.find(LOCAL_IMAGE_MARKER)?;
    let alt = &trimmed[2..marker];
    let rel = &trimmed[marker + LOCAL_IMAGE_MARKER.len()..trimmed.len() - 1];
    Some((alt, rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use std::path::PathBuf;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn classifier(source: MemorySource) -> ContentClassifier {
        ContentClassifier::with_source(Arc::new(source), ClassifyOptions::default())
    }

    fn plain(content: &str) -> ClassifiedContent {
        classifier(MemorySource::new()).classify_content(content, &HashMap::new(), Path::new("."))
    }

    #[test]
    fn test_iframe() {
        assert_eq!(
            plain("<iframe src=\"http://x\"></iframe>"),
            ClassifiedContent::Iframe {
                url: "http://x".into()
            }
        );
        assert_eq!(
            plain("  <iframe width=\"600\" src=\"https://a.b/c?d=1\" allowfullscreen></iframe>\n"),
            ClassifiedContent::Iframe {
                url: "https://a.b/c?d=1".into()
            }
        );
    }

    #[test]
    fn test_iframe_ignores_prefixed_src_attributes() {
        assert_eq!(
            plain("<iframe data-src=\"lazy\" src=\"http://real\"></iframe>"),
            ClassifiedContent::Iframe {
                url: "http://real".into()
            }
        );
        assert_eq!(
            plain("<iframe data-src=\"lazy\"></iframe>"),
            ClassifiedContent::plain("Error: Invalid iframe tag - no src attribute found", 28)
        );
    }

    #[test]
    fn test_iframe_without_src() {
        assert_eq!(
            plain("<iframe width=\"600\"></iframe>"),
            ClassifiedContent::plain("Error: Invalid iframe tag - no src attribute found", 28)
        );
    }

    #[test]
    fn test_external_markdown() {
        let source = MemorySource::new()
            .with_file("docs/notes.md", "# Notes\n![fig](fig.png)")
            .with_file("docs/fig.png", b"png".to_vec());
        let content = classifier(source).classify_content(
            "./docs/notes.md",
            &HashMap::new(),
            Path::new("."),
        );

        match content {
            ClassifiedContent::ExternalMarkdownFile {
                path,
                text,
                font_size,
            } => {
                assert_eq!(path, PathBuf::from("./docs/notes.md"));
                assert_eq!(font_size, 16);
                assert_eq!(
                    text,
                    format!("# Notes\n![fig](data:image/png;base64,{})", STANDARD.encode(b"png"))
                );
            }
            other => panic!("Expected external markdown, got {:?}", other),
        }
    }

    #[test]
    fn test_external_markdown_missing() {
        assert_eq!(
            plain("./missing.md"),
            ClassifiedContent::plain("Error: File not found: ./missing.md", 28)
        );
    }

    #[test]
    fn test_external_markdown_unreadable() {
        let source = MemorySource::new().with_file("bad.md", vec![0xFF, 0xFE, 0xFD]);
        let content =
            classifier(source).classify_content("./bad.md", &HashMap::new(), Path::new("."));
        let text = content.text().unwrap();
        assert!(text.starts_with("Error loading markdown file: "));
        assert_eq!(content.font_size(), Some(28));
    }

    #[test]
    fn test_local_image() {
        assert_eq!(
            plain("![Diagram](./img/diagram.png)"),
            ClassifiedContent::LocalImage {
                alt: "Diagram".into(),
                path: PathBuf::from("./img/diagram.png"),
            }
        );

        let content = classifier(MemorySource::new()).classify_content(
            "![](./a.png)",
            &HashMap::new(),
            Path::new("slides"),
        );
        assert_eq!(
            content,
            ClassifiedContent::LocalImage {
                alt: String::new(),
                path: PathBuf::from("slides/a.png"),
            }
        );
    }

    #[test]
    fn test_relative_image_without_dot_slash_is_plain_text() {
        assert_eq!(
            plain("![a](missing.png)"),
            ClassifiedContent::plain("![a](missing.png)", 28)
        );
    }

    #[test]
    fn test_plain_text_font_sizes() {
        let classifier = classifier(MemorySource::new());
        let mut metadata = HashMap::new();
        metadata.insert("font".to_string(), "small".to_string());

        let small = classifier.classify_content("text", &metadata, Path::new("."));
        assert_eq!(small.font_size(), Some(20));

        metadata.insert("font".to_string(), "Small".to_string());
        let default = classifier.classify_content("text", &metadata, Path::new("."));
        assert_eq!(default.font_size(), Some(28));
    }

    #[test]
    fn test_plain_text_keeps_untrimmed_content() {
        assert_eq!(plain("\n  indented\n"), ClassifiedContent::plain("\n  indented\n", 28));
    }

    #[test]
    fn test_plain_text_inlines_images() {
        let source = MemorySource::new().with_file("a.gif", b"gif".to_vec());
        let content =
            classifier(source).classify_content("see ![a](a.gif)", &HashMap::new(), Path::new("."));
        assert!(content
            .text()
            .unwrap()
            .starts_with("see ![a](data:image/gif;base64,"));
    }

    #[test]
    fn test_near_misses_are_plain_text() {
        assert_eq!(plain("./notes.txt").kind(), "plain_text");
        assert_eq!(plain("").kind(), "plain_text");
        assert_eq!(plain("<iframe src=\"x\">").kind(), "plain_text");
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let sections = vec![
            Section::with_content("<iframe src=\"http://a\"></iframe>"),
            Section::with_content("text").with_meta("font", "small"),
            Section::with_content("![x](./x.png)"),
        ];
        let parallel = classifier(MemorySource::new());
        let sequential = ContentClassifier::with_source(
            Arc::new(MemorySource::new()),
            ClassifyOptions::new().sequential(),
        );

        let a = parallel.classify_all(&sections, Path::new("."));
        let b = sequential.classify_all(&sections, Path::new("."));
        assert_eq!(a, b);
        let kinds: Vec<_> = a.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec!["iframe", "plain_text", "local_image"]);
    }
}
