//! Slide document parser.
//!
//! A document is split on lines that are exactly `---`. Each non-blank
//! block is folded line by line into a [`SlideRecord`]:
//!
//! ```text
//! # Slide title
//! slide-type <- standard
//! font <- small
//! Left column text
//! section-break
//! Right column text
//! ```

use super::directive::parse_directive;
use crate::model::{Section, SlideRecord, SlideType, SLIDE_TYPE_KEY};

/// Line separating slides.
pub const SLIDE_DELIMITER: &str = "---";

/// Line separating sections within a slide.
pub const SECTION_BREAK: &str = "section-break";

/// Prefix of the title line.
pub const TITLE_PREFIX: &str = "# ";

/// Parser for slide documents.
///
/// Parsing never fails. Shape problems such as a title slide with two
/// sections are left for slide construction to report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideParser;

impl SlideParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a document into slide records in document order.
    pub fn parse(&self, text: &str) -> Vec<SlideRecord> {
        let slides: Vec<SlideRecord> = split_blocks(text)
            .into_iter()
            .filter(|block| block.iter().any(|line| !line.trim().is_empty()))
            .map(|block| self.parse_block(&block))
            .collect();

        log::debug!("Parsed {} slides", slides.len());
        slides
    }

    /// Parse the lines of a single slide block.
    pub fn parse_block(&self, lines: &[&str]) -> SlideRecord {
        lines
            .iter()
            .fold(SlideDraft::default(), |draft, line| draft.accept(line))
            .finish()
    }
}

/// Parse a document into slide records.
pub fn parse_slides(text: &str) -> Vec<SlideRecord> {
    SlideParser::new().parse(text)
}

/// Split a document into blocks of lines on delimiter lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    text.lines().fold(vec![Vec::new()], |mut blocks, line| {
        if line == SLIDE_DELIMITER {
            blocks.push(Vec::new());
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
        blocks
    })
}

/// Fold state for one slide block.
#[derive(Debug, Default)]
struct SlideDraft {
    /// `Some` once a title line was seen, even if its text was empty
    title: Option<Option<String>>,
    slide_type: SlideType,
    closed: Vec<Section>,
    current: Section,
}

impl SlideDraft {
    fn accept(mut self, line: &str) -> Self {
        if self.title.is_none() {
            if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
                let title = rest.trim();
                self.title = Some((!title.is_empty()).then(|| title.to_string()));
                return self;
            }
        }

        if line == SECTION_BREAK {
            let finished = std::mem::take(&mut self.current);
            self.closed.push(finished);
            return self;
        }

        if let Some(directive) = parse_directive(line) {
            if directive.key == SLIDE_TYPE_KEY {
                self.slide_type = SlideType::from(directive.value);
            } else {
                self.current
                    .metadata
                    .insert(directive.key.to_string(), directive.value.to_string());
            }
            return self;
        }

        self.current.push_line(line);
        self
    }

    fn finish(mut self) -> SlideRecord {
        self.closed.push(self.current);
        SlideRecord {
            title: self.title.flatten(),
            slide_type: self.slide_type,
            sections: self.closed,
        }
    }
}
