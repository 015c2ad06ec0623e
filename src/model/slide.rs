//! Slide-level types produced by the parser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reserved directive key that sets the slide type.
pub const SLIDE_TYPE_KEY: &str = "slide-type";

/// One logical slide before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Slide title from the first `# ` line
    pub title: Option<String>,

    /// Slide type from the `slide-type` directive
    pub slide_type: SlideType,

    /// Content sections (columns) in document order
    pub sections: Vec<Section>,
}

impl SlideRecord {
    /// Create a standard slide with a single empty section.
    pub fn new() -> Self {
        Self {
            title: None,
            slide_type: SlideType::Standard,
            sections: vec![Section::new()],
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the slide type.
    pub fn with_type(mut self, slide_type: SlideType) -> Self {
        self.slide_type = slide_type;
        self
    }

    /// Replace the sections.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Title text, empty when the slide has none.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if this is a title slide.
    pub fn is_title(&self) -> bool {
        self.slide_type == SlideType::Title
    }
}

/// Slide type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SlideType {
    /// Regular slide with one or two content columns
    #[default]
    Standard,
    /// Title slide (title, subtitle, author)
    Title,
    /// Any other value; rendered like a standard slide
    Custom(String),
}

impl SlideType {
    /// Textual form used in the `slide-type` directive.
    pub fn as_str(&self) -> &str {
        match self {
            SlideType::Standard => "standard",
            SlideType::Title => "title",
            SlideType::Custom(name) => name,
        }
    }
}

impl From<&str> for SlideType {
    fn from(value: &str) -> Self {
        match value {
            "standard" => SlideType::Standard,
            "title" => SlideType::Title,
            other => SlideType::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SlideType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SlideType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SlideType::from(value.as_str()))
    }
}

/// One column of slide content with its own metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Key/value metadata from directive lines
    pub metadata: HashMap<String, String>,

    /// Newline-joined content lines
    pub content: String,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a section with content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            metadata: HashMap::new(),
            content: content.into(),
        }
    }

    /// Add a metadata entry (last value wins).
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Get a metadata value.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Append a line of content.
    pub fn push_line(&mut self, line: &str) {
        if self.content.is_empty() {
            self.content.push_str(line);
        } else {
            self.content.push('\n');
            self.content.push_str(line);
        }
    }

    /// Check if the section has neither metadata nor content.
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty() && self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_type_round_trip_names() {
        assert_eq!(SlideType::from("title"), SlideType::Title);
        assert_eq!(SlideType::from("standard"), SlideType::Standard);
        assert_eq!(
            SlideType::from("quote"),
            SlideType::Custom("quote".to_string())
        );
        assert_eq!(SlideType::Custom("quote".into()).to_string(), "quote");
        assert_eq!(SlideType::default().as_str(), "standard");
    }

    #[test]
    fn test_slide_type_serde() {
        let json = serde_json::to_string(&SlideType::Title).unwrap();
        assert_eq!(json, "\"title\"");
        let parsed: SlideType = serde_json::from_str("\"demo\"").unwrap();
        assert_eq!(parsed, SlideType::Custom("demo".into()));
    }

    #[test]
    fn test_section_push_line() {
        let mut section = Section::new();
        section.push_line("first");
        section.push_line("");
        section.push_line("third");
        assert_eq!(section.content, "first\n\nthird");
    }

    #[test]
    fn test_section_push_line_starts_without_newline() {
        let mut section = Section::new();
        section.push_line("");
        section.push_line("text");
        assert_eq!(section.content, "text");
    }

    #[test]
    fn test_slide_record_defaults() {
        let slide = SlideRecord::new();
        assert_eq!(slide.title_text(), "");
        assert_eq!(slide.section_count(), 1);
        assert!(!slide.is_title());

        let slide = SlideRecord::new()
            .with_title("Intro")
            .with_type(SlideType::Title);
        assert_eq!(slide.title_text(), "Intro");
        assert!(slide.is_title());
    }

    #[test]
    fn test_section_meta() {
        let section = Section::new().with_meta("font", "big").with_meta("font", "small");
        assert_eq!(section.meta("font"), Some("small"));
        assert_eq!(section.meta("Font"), None);
        assert!(!section.is_empty());
    }
}
