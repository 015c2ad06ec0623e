//! Deck statistics.

use crate::classify::find_image_references;
use crate::model::{ClassifiedContent, Deck, RenderedSlide};
use serde::{Deserialize, Serialize};

/// Statistics collected over a built deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Total number of slides
    pub slide_count: u32,

    /// Number of title slides
    pub title_slide_count: u32,

    /// Number of content columns across standard slides
    pub column_count: u32,

    /// Number of iframe payloads
    pub iframe_count: u32,

    /// Number of external markdown payloads
    pub external_file_count: u32,

    /// Number of local image payloads
    pub local_image_count: u32,

    /// Number of plain text payloads
    pub plain_text_count: u32,

    /// Image references rewritten as data URIs
    pub embedded_image_count: u32,

    /// Image references left pointing at a path or URL
    pub linked_image_count: u32,
}

impl DeckStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics over a deck.
    pub fn from_deck(deck: &Deck) -> Self {
        let mut stats = Self::new();
        for slide in &deck.slides {
            stats.add_slide(slide);
        }
        stats
    }

    /// Count one slide and its contents.
    pub fn add_slide(&mut self, slide: &RenderedSlide) {
        self.slide_count += 1;
        if slide.is_title() {
            self.title_slide_count += 1;
        }
        for content in slide.contents() {
            self.add_content(content);
        }
    }

    /// Count one classified payload.
    pub fn add_content(&mut self, content: &ClassifiedContent) {
        self.column_count += 1;
        match content {
            ClassifiedContent::Iframe { .. } => self.iframe_count += 1,
            ClassifiedContent::ExternalMarkdownFile { .. } => self.external_file_count += 1,
            ClassifiedContent::LocalImage { .. } => self.local_image_count += 1,
            ClassifiedContent::PlainText { .. } => self.plain_text_count += 1,
        }

        if let Some(text) = content.text() {
            for image in find_image_references(text) {
                if image.is_embedded() {
                    self.embedded_image_count += 1;
                } else {
                    self.linked_image_count += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SlideContent, SlideText, StandardSlide};
    use std::path::PathBuf;

    fn slide(content: SlideContent) -> RenderedSlide {
        RenderedSlide::Standard(StandardSlide {
            title: SlideText::new("", 50, "SANS-SERIF"),
            content,
            header: None,
            footer: None,
            background_color: "white".into(),
        })
    }

    #[test]
    fn test_stats_counts_kinds_and_images() {
        let deck = Deck::with_slides(vec![
            slide(SlideContent::Columns(vec![
                ClassifiedContent::plain("![a](data:image/png;base64,AA) ![b](b.png)", 28),
                ClassifiedContent::Iframe {
                    url: "http://x".into(),
                },
            ])),
            slide(SlideContent::Single(ClassifiedContent::LocalImage {
                alt: String::new(),
                path: PathBuf::from("./a.png"),
            })),
        ]);

        let stats = deck.stats();
        assert_eq!(stats.slide_count, 2);
        assert_eq!(stats.title_slide_count, 0);
        assert_eq!(stats.column_count, 3);
        assert_eq!(stats.plain_text_count, 1);
        assert_eq!(stats.iframe_count, 1);
        assert_eq!(stats.local_image_count, 1);
        assert_eq!(stats.embedded_image_count, 1);
        assert_eq!(stats.linked_image_count, 1);
    }
}
