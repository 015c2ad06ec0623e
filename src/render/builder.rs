//! Slide construction from parsed records.
//!
//! A [`SlideBuilder`] turns one [`SlideRecord`] into whatever the rendering
//! side needs. The [`DefaultSlideBuilder`] produces [`RenderedSlide`]s and
//! enforces section counts; any closure with the right signature can be
//! used instead.
//!
//! # Example
//!
//! ```
//! use mdslides::render::{build_slides, SlideContext};
//! use mdslides::{parse_slides, ContentClassifier, SlideRecord};
//! use std::path::Path;
//!
//! let records = parse_slides("# One\n---\n# Two");
//! let classifier = ContentClassifier::default();
//! let titles = build_slides(
//!     &records,
//!     &|slide: &SlideRecord, _ctx: &SlideContext| -> mdslides::Result<String> {
//!         Ok(slide.title_text().to_uppercase())
//!     },
//!     &classifier,
//!     Path::new("."),
//!     false,
//! )?;
//! assert_eq!(titles, vec!["ONE", "TWO"]);
//! # Ok::<(), mdslides::Error>(())
//! ```

use rayon::prelude::*;
use std::path::Path;

use super::Theme;
use crate::classify::ContentClassifier;
use crate::error::{Error, Result};
use crate::model::{
    ClassifiedContent, RenderedSlide, Section, SlideContent, SlideRecord, SlideText, SlideType,
    StandardSlide, TitleSlide,
};

/// Metadata key holding the title slide subtitle.
pub const SUBTITLE_KEY: &str = "subtitle";

/// Metadata key holding the title slide author.
pub const AUTHOR_KEY: &str = "author";

/// What a builder gets to work with besides the record itself.
#[derive(Debug, Clone, Copy)]
pub struct SlideContext<'a> {
    /// 0-based slide index in document order
    pub index: usize,
    /// Classifier for section content
    pub classifier: &'a ContentClassifier,
    /// Directory relative paths are resolved against
    pub base_dir: &'a Path,
}

impl SlideContext<'_> {
    /// Classify one section.
    pub fn classify(&self, section: &Section) -> ClassifiedContent {
        self.classifier.classify(section, self.base_dir)
    }

    /// Classify sections in order.
    pub fn classify_all(&self, sections: &[Section]) -> Vec<ClassifiedContent> {
        self.classifier.classify_all(sections, self.base_dir)
    }
}

/// Turns a slide record into a rendered slide.
///
/// Errors returned here abort the whole build.
pub trait SlideBuilder {
    /// Rendered slide type.
    type Output;

    /// Build one slide.
    fn build(&self, slide: &SlideRecord, ctx: &SlideContext<'_>) -> Result<Self::Output>;
}

impl<F, T> SlideBuilder for F
where
    F: Fn(&SlideRecord, &SlideContext<'_>) -> Result<T>,
{
    type Output = T;

    fn build(&self, slide: &SlideRecord, ctx: &SlideContext<'_>) -> Result<T> {
        self(slide, ctx)
    }
}

/// Builds [`RenderedSlide`]s styled by a [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct DefaultSlideBuilder {
    theme: Theme,
}

impl DefaultSlideBuilder {
    /// Create a builder with a theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Get the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn text(&self, text: &str, font_size: u32) -> SlideText {
        SlideText::new(text, font_size, self.theme.font_family.clone())
    }

    fn title_slide(&self, slide: &SlideRecord) -> Result<RenderedSlide> {
        let [section] = slide.sections.as_slice() else {
            return Err(Error::Structural(format!(
                "title slide must have exactly one section, found {}",
                slide.sections.len()
            )));
        };

        let color = &self.theme.title_text_color;
        Ok(RenderedSlide::Title(TitleSlide {
            title: self
                .text(slide.title_text(), self.theme.title_font_size)
                .with_color(color),
            subtitle: self
                .text(
                    section.meta(SUBTITLE_KEY).unwrap_or(""),
                    self.theme.subtitle_font_size,
                )
                .with_color(color),
            author: self
                .text(
                    section.meta(AUTHOR_KEY).unwrap_or(""),
                    self.theme.author_font_size,
                )
                .with_color(color),
            background_color: self.theme.title_background_color.clone(),
        }))
    }

    fn standard_slide(&self, slide: &SlideRecord, ctx: &SlideContext<'_>) -> Result<RenderedSlide> {
        let count = slide.sections.len();
        if !(1..=2).contains(&count) {
            return Err(Error::Structural(format!(
                "{} slide must have one or two sections, found {}",
                slide.slide_type, count
            )));
        }

        let mut items = ctx.classify_all(&slide.sections);
        let content = if items.len() == 1 {
            SlideContent::Single(items.remove(0))
        } else {
            SlideContent::Columns(items)
        };

        Ok(RenderedSlide::Standard(StandardSlide {
            title: self.text(slide.title_text(), self.theme.slide_title_font_size),
            content,
            header: self.theme.header.clone(),
            footer: self.theme.footer.clone(),
            background_color: self.theme.background_color.clone(),
        }))
    }
}

impl SlideBuilder for DefaultSlideBuilder {
    type Output = RenderedSlide;

    fn build(&self, slide: &SlideRecord, ctx: &SlideContext<'_>) -> Result<RenderedSlide> {
        match slide.slide_type {
            SlideType::Title => self.title_slide(slide),
            SlideType::Standard | SlideType::Custom(_) => self.standard_slide(slide, ctx),
        }
    }
}

/// Build every record in document order.
///
/// The first failing slide (in document order) aborts the build; its error
/// is wrapped in [`Error::InvalidSlide`]. With `parallel`, slides are built
/// on the rayon pool but the output order still matches `records`.
pub fn build_slides<B>(
    records: &[SlideRecord],
    builder: &B,
    classifier: &ContentClassifier,
    base_dir: &Path,
    parallel: bool,
) -> Result<Vec<B::Output>>
where
    B: SlideBuilder + Sync,
    B::Output: Send,
{
    let build_one = |(index, slide): (usize, &SlideRecord)| {
        let ctx = SlideContext {
            index,
            classifier,
            base_dir,
        };
        builder.build(slide, &ctx).map_err(|e| e.at_slide(index))
    };

    if parallel {
        let results: Vec<Result<B::Output>> =
            records.par_iter().enumerate().map(build_one).collect();
        results.into_iter().collect()
    } else {
        records.iter().enumerate().map(build_one).collect()
    }
}
