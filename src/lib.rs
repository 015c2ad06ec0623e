//! # mdslides
//!
//! Slide deck construction from a lightweight markdown-derived format.
//!
//! A document is split into slides on `---` lines and into sections
//! (columns) on `section-break` lines. `key <- value` lines attach metadata
//! to the current section, and `slide-type <- title` turns a slide into a
//! title slide. Section content is classified as an iframe, an external
//! markdown file, a local image or plain text, and image references in text
//! are inlined as base64 data URIs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdslides::{render, MdSlides};
//!
//! fn main() -> mdslides::Result<()> {
//!     let deck = MdSlides::new().build_file("slides/index.md")?;
//!
//!     println!("{} slides", deck.slide_count());
//!     let json = render::to_json(&deck, render::JsonFormat::Pretty)?;
//!     std::fs::write("slides.json", json)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Document format
//!
//! ```text
//! # AI Agents for Data Science
//! slide-type <- title
//! subtitle <- A short introduction
//! author <- Jane Doe
//! ---
//! # Two columns
//! font <- small
//! Left column with ![a chart](chart.png)
//! section-break
//! <iframe src="https://example.com/demo"></iframe>
//! ```

pub mod classify;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use classify::{
    find_image_references, inline_images, ClassifyOptions, ContentClassifier, FontSizes,
    ImageInliner,
};
pub use error::{Error, Result};
pub use model::{
    ClassifiedContent, Deck, ImageReference, RenderedSlide, Section, SlideBand, SlideContent,
    SlideRecord, SlideText, SlideType, StandardSlide, TitleSlide,
};
pub use parser::{parse_slides, SlideParser};
pub use render::{
    DeckStats, DefaultSlideBuilder, JsonFormat, SlideBuilder, SlideContext, Theme,
};
pub use source::{ContentSource, FsSource, MemorySource};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Parse a slide document file into slide records.
///
/// # Example
///
/// ```no_run
/// use mdslides::parse_file;
///
/// let slides = parse_file("index.md").unwrap();
/// println!("Slides: {}", slides.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<SlideRecord>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_slides(&text))
}

/// Build a deck from document text with default options.
///
/// Relative paths are resolved against `base_dir`.
///
/// # Example
///
/// ```
/// use mdslides::build_deck;
///
/// let deck = build_deck("# Hello\nWorld", ".").unwrap();
/// assert_eq!(deck.slide_count(), 1);
/// ```
pub fn build_deck<P: AsRef<Path>>(text: &str, base_dir: P) -> Result<Deck> {
    MdSlides::new().with_base_dir(base_dir.as_ref()).build(text)
}

/// Builder for parsing documents and building decks.
///
/// # Example
///
/// ```no_run
/// use mdslides::{MdSlides, Theme};
///
/// let deck = MdSlides::new()
///     .with_theme(Theme::new().with_accent("#F0751C"))
///     .with_title("AI Agents for Data Science")
///     .sequential()
///     .build_file("index.md")?;
/// # Ok::<(), mdslides::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MdSlides {
    base_dir: Option<PathBuf>,
    classify_options: ClassifyOptions,
    theme: Theme,
    title: Option<String>,
    source: Option<Arc<dyn ContentSource>>,
}

impl MdSlides {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_dir: None,
            classify_options: ClassifyOptions::default(),
            theme: Theme::default(),
            title: None,
            source: None,
        }
    }

    /// Set the directory relative paths are resolved against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set classify options.
    pub fn with_classify_options(mut self, options: ClassifyOptions) -> Self {
        self.classify_options = options;
        self
    }

    /// Set font sizes.
    pub fn with_font_sizes(mut self, font_sizes: FontSizes) -> Self {
        self.classify_options = self.classify_options.with_font_sizes(font_sizes);
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the deck title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Read external files and images from `source` instead of the filesystem.
    pub fn with_source(mut self, source: Arc<dyn ContentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.classify_options = self.classify_options.sequential();
        self
    }

    /// Parse document text into slide records.
    pub fn parse(&self, text: &str) -> Vec<SlideRecord> {
        parse_slides(text)
    }

    /// Build a deck from document text.
    pub fn build(&self, text: &str) -> Result<Deck> {
        let builder = DefaultSlideBuilder::new(self.theme.clone());
        let slides = self.build_with(text, &builder)?;

        let mut deck = Deck::with_slides(slides);
        deck.title = self
            .title
            .clone()
            .or_else(|| deck.first_title().map(str::to_string));
        Ok(deck)
    }

    /// Build slides from document text with a custom builder.
    pub fn build_with<B>(&self, text: &str, builder: &B) -> Result<Vec<B::Output>>
    where
        B: SlideBuilder + Sync,
        B::Output: Send,
    {
        let records = self.parse(text);
        let classifier = self.classifier();
        let base_dir = self.base_dir.as_deref().unwrap_or_else(|| Path::new("."));

        render::build_slides(
            &records,
            builder,
            &classifier,
            base_dir,
            self.classify_options.parallel,
        )
    }

    /// Read a document file and build a deck.
    ///
    /// Unless a base directory was set, relative paths are resolved
    /// against the directory containing the file.
    pub fn build_file<P: AsRef<Path>>(&self, path: P) -> Result<Deck> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        log::debug!("Building deck from {}", path.display());

        if self.base_dir.is_some() {
            return self.build(&text);
        }

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.clone().with_base_dir(dir).build(&text)
    }

    fn classifier(&self) -> ContentClassifier {
        let source: Arc<dyn ContentSource> = match &self.source {
            Some(source) => source.clone(),
            None => Arc::new(FsSource),
        };
        ContentClassifier::with_source(source, self.classify_options.clone())
    }
}

impl Default for MdSlides {
    fn default() -> Self {
        Self::new()
    }
}
