//! Data model for slide documents.
//!
//! [`SlideRecord`] and [`Section`] are produced by the parser,
//! [`ClassifiedContent`] by the classifier, and [`Deck`] with its
//! [`RenderedSlide`]s by slide construction. Everything here is an owned
//! value type.

mod content;
mod deck;
mod slide;

pub use content::{mime_type_for, ClassifiedContent, ImageReference};
pub use deck::{
    Deck, RenderedSlide, SlideBand, SlideContent, SlideText, StandardSlide, TitleSlide,
};
pub use slide::{Section, SlideRecord, SlideType, SLIDE_TYPE_KEY};
