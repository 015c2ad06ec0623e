//! Slide construction and deck output.

mod builder;
mod json;
mod result;
mod theme;

pub use builder::{
    build_slides, DefaultSlideBuilder, SlideBuilder, SlideContext, AUTHOR_KEY, SUBTITLE_KEY,
};
pub use json::{to_json, JsonFormat};
pub use result::DeckStats;
pub use theme::Theme;
