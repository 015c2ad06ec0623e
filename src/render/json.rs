//! JSON rendering for slide decks.

use crate::error::{Error, Result};
use crate::model::Deck;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a deck to JSON.
pub fn to_json(deck: &Deck, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(deck),
        JsonFormat::Compact => serde_json::to_string(deck),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ClassifiedContent, RenderedSlide, SlideContent, SlideText, StandardSlide,
    };

    fn sample_deck() -> Deck {
        let mut deck = Deck::new();
        deck.title = Some("Test".to_string());
        deck.add_slide(RenderedSlide::Standard(StandardSlide {
            title: SlideText::new("Hello", 50, "SANS-SERIF"),
            content: SlideContent::Single(ClassifiedContent::plain("World", 28)),
            header: None,
            footer: None,
            background_color: "white".into(),
        }));
        deck
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_deck(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"type\": \"standard\""));
        assert!(json.contains("\"layout\": \"single\""));
        assert!(json.contains("\"kind\": \"plain_text\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_deck(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_json_round_trip() {
        let deck = sample_deck();
        let json = to_json(&deck, JsonFormat::Compact).unwrap();
        let parsed: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, deck);
    }
}
