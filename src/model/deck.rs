//! Deck-level types handed to the rendering collaborator.

use super::ClassifiedContent;
use crate::render::DeckStats;
use serde::{Deserialize, Serialize};

/// An ordered slide deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title
    pub title: Option<String>,

    /// Slides in document order
    pub slides: Vec<RenderedSlide>,
}

impl Deck {
    /// Create a new empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from rendered slides.
    pub fn with_slides(slides: Vec<RenderedSlide>) -> Self {
        Self { title: None, slides }
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check if the deck has any slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get a slide by number (1-indexed).
    pub fn get_slide(&self, number: usize) -> Option<&RenderedSlide> {
        if number == 0 {
            return None;
        }
        self.slides.get(number - 1)
    }

    /// Add a slide.
    pub fn add_slide(&mut self, slide: RenderedSlide) {
        self.slides.push(slide);
    }

    /// Title of the first title slide, if any.
    pub fn first_title(&self) -> Option<&str> {
        self.slides.iter().find_map(|slide| match slide {
            RenderedSlide::Title(t) if !t.title.text.is_empty() => Some(t.title.text.as_str()),
            _ => None,
        })
    }

    /// Collect statistics over the deck.
    pub fn stats(&self) -> DeckStats {
        DeckStats::from_deck(self)
    }
}

/// A constructed slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedSlide {
    /// Title slide
    Title(TitleSlide),

    /// Standard slide with one or two columns
    Standard(StandardSlide),
}

impl RenderedSlide {
    /// Get the slide title text.
    pub fn title_text(&self) -> &str {
        match self {
            RenderedSlide::Title(t) => &t.title.text,
            RenderedSlide::Standard(s) => &s.title.text,
        }
    }

    /// Check if this is a title slide.
    pub fn is_title(&self) -> bool {
        matches!(self, RenderedSlide::Title(_))
    }

    /// Classified contents in column order (empty for title slides).
    pub fn contents(&self) -> &[ClassifiedContent] {
        match self {
            RenderedSlide::Title(_) => &[],
            RenderedSlide::Standard(s) => s.content.items(),
        }
    }
}

/// Title slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSlide {
    /// Main title
    pub title: SlideText,
    /// Subtitle from the `subtitle` metadata key
    pub subtitle: SlideText,
    /// Author from the `author` metadata key
    pub author: SlideText,
    /// Background color
    pub background_color: String,
}

/// Standard slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardSlide {
    /// Slide title
    pub title: SlideText,
    /// Slide body
    pub content: SlideContent,
    /// Header band
    pub header: Option<SlideBand>,
    /// Footer band
    pub footer: Option<SlideBand>,
    /// Background color
    pub background_color: String,
}

/// Styled text element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideText {
    /// Text content
    pub text: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Font family name
    pub font_family: String,
    /// Text color (renderer default when absent)
    pub color: Option<String>,
}

impl SlideText {
    /// Create a text element without an explicit color.
    pub fn new(text: impl Into<String>, font_size: u32, font_family: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_family: font_family.into(),
            color: None,
        }
    }

    /// Set the text color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Body of a standard slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", content = "items", rename_all = "snake_case")]
pub enum SlideContent {
    /// One column
    Single(ClassifiedContent),
    /// Horizontal columns with equal stretch
    Columns(Vec<ClassifiedContent>),
}

impl SlideContent {
    /// Contents in column order.
    pub fn items(&self) -> &[ClassifiedContent] {
        match self {
            SlideContent::Single(item) => std::slice::from_ref(item),
            SlideContent::Columns(items) => items,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.items().len()
    }
}

/// Solid header or footer band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideBand {
    /// Height in pixels
    pub height: u32,
    /// Background color
    pub background_color: String,
}

impl SlideBand {
    /// Create a band.
    pub fn new(height: u32, background_color: impl Into<String>) -> Self {
        Self {
            height,
            background_color: background_color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(title: &str, content: SlideContent) -> RenderedSlide {
        RenderedSlide::Standard(StandardSlide {
            title: SlideText::new(title, 50, "SANS-SERIF"),
            content,
            header: None,
            footer: None,
            background_color: "white".into(),
        })
    }

    #[test]
    fn test_deck_new() {
        let deck = Deck::new();
        assert!(deck.is_empty());
        assert_eq!(deck.slide_count(), 0);
        assert!(deck.get_slide(0).is_none());
    }

    #[test]
    fn test_deck_get_slide_is_one_based() {
        let mut deck = Deck::new();
        deck.add_slide(standard(
            "One",
            SlideContent::Single(ClassifiedContent::plain("a", 28)),
        ));
        deck.add_slide(standard(
            "Two",
            SlideContent::Single(ClassifiedContent::plain("b", 28)),
        ));

        assert_eq!(deck.get_slide(1).unwrap().title_text(), "One");
        assert_eq!(deck.get_slide(2).unwrap().title_text(), "Two");
        assert!(deck.get_slide(3).is_none());
        assert!(deck.first_title().is_none());
    }

    #[test]
    fn test_slide_content_items() {
        let single = SlideContent::Single(ClassifiedContent::plain("a", 28));
        assert_eq!(single.column_count(), 1);

        let columns = SlideContent::Columns(vec![
            ClassifiedContent::plain("a", 28),
            ClassifiedContent::Iframe {
                url: "http://x".into(),
            },
        ]);
        assert_eq!(columns.column_count(), 2);
        assert_eq!(columns.items()[1].kind(), "iframe");
    }

    #[test]
    fn test_title_slide_contents_empty() {
        let slide = RenderedSlide::Title(TitleSlide {
            title: SlideText::new("Deck", 80, "SANS-SERIF").with_color("white"),
            subtitle: SlideText::new("", 40, "SANS-SERIF"),
            author: SlideText::new("", 30, "SANS-SERIF"),
            background_color: "#F0751C".into(),
        });
        assert!(slide.is_title());
        assert!(slide.contents().is_empty());

        let deck = Deck::with_slides(vec![slide]);
        assert_eq!(deck.first_title(), Some("Deck"));
    }
}
