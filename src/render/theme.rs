//! Slide styling configuration.

use crate::model::SlideBand;
use serde::{Deserialize, Serialize};

/// Styling applied by the default slide builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Font family for all slide text
    pub font_family: String,

    /// Background of title slides
    pub title_background_color: String,

    /// Background of standard slides
    pub background_color: String,

    /// Text color on title slides
    pub title_text_color: String,

    /// Title size on title slides
    pub title_font_size: u32,

    /// Subtitle size on title slides
    pub subtitle_font_size: u32,

    /// Author size on title slides
    pub author_font_size: u32,

    /// Title size on standard slides
    pub slide_title_font_size: u32,

    /// Header band on standard slides
    pub header: Option<SlideBand>,

    /// Footer band on standard slides
    pub footer: Option<SlideBand>,
}

impl Theme {
    /// Create a theme with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the title slide background color.
    pub fn with_title_background(mut self, color: impl Into<String>) -> Self {
        self.title_background_color = color.into();
        self
    }

    /// Set the standard slide background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the header band.
    pub fn with_header(mut self, band: SlideBand) -> Self {
        self.header = Some(band);
        self
    }

    /// Set the footer band.
    pub fn with_footer(mut self, band: SlideBand) -> Self {
        self.footer = Some(band);
        self
    }

    /// Use one accent color for the title background and thin header/footer bands.
    pub fn with_accent(self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.with_title_background(color.clone())
            .with_header(SlideBand::new(10, color.clone()))
            .with_footer(SlideBand::new(10, color))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "SANS-SERIF".to_string(),
            title_background_color: "#F0751C".to_string(),
            background_color: "white".to_string(),
            title_text_color: "white".to_string(),
            title_font_size: 80,
            subtitle_font_size: 40,
            author_font_size: 30,
            slide_title_font_size: 50,
            header: None,
            footer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.font_family, "SANS-SERIF");
        assert_eq!(theme.title_background_color, "#F0751C");
        assert_eq!(theme.background_color, "white");
        assert_eq!(theme.title_font_size, 80);
        assert_eq!(theme.slide_title_font_size, 50);
        assert!(theme.header.is_none());
    }

    #[test]
    fn test_with_accent() {
        let theme = Theme::new().with_accent("#123456");
        assert_eq!(theme.title_background_color, "#123456");
        assert_eq!(theme.header, Some(SlideBand::new(10, "#123456")));
        assert_eq!(theme.footer, Some(SlideBand::new(10, "#123456")));
    }

    #[test]
    fn test_partial_deserialize() {
        let theme: Theme =
            serde_json::from_str(r#"{"background_color": "black", "header": {"height": 12, "background_color": "red"}}"#)
                .unwrap();
        assert_eq!(theme.background_color, "black");
        assert_eq!(theme.header, Some(SlideBand::new(12, "red")));
        assert_eq!(theme.font_family, "SANS-SERIF");
    }
}
