//! Slide document parsing module.

mod directive;
mod slide_parser;

pub use directive::{parse_directive, Directive, DIRECTIVE_SEPARATOR};
pub use slide_parser::{parse_slides, SlideParser, SECTION_BREAK, SLIDE_DELIMITER, TITLE_PREFIX};
