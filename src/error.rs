//! Error types for mdslides library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdslides operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a slide deck.
///
/// Only [`Error::Io`], [`Error::Structural`], [`Error::InvalidSlide`] and
/// [`Error::Render`] reach the caller of a deck build. Content errors are
/// recovered inside the classifier and turned into placeholder text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Slide or section cardinality violation.
    #[error("Invalid slide structure: {0}")]
    Structural(String),

    /// A slide could not be constructed.
    #[error("Slide {number}: {source}")]
    InvalidSlide {
        /// 1-based slide number in document order
        number: usize,
        /// Underlying builder error
        source: Box<Error>,
    },

    /// An external markdown file or image could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ContentRead {
        /// Resolved path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A content directive is malformed (e.g. iframe without `src`).
    #[error("Malformed directive: {0}")]
    MalformedDirective(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build a content read error for `path`.
    pub fn content_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ContentRead {
            path: path.into(),
            source,
        }
    }

    /// Tag an error with the slide it came from.
    pub fn at_slide(self, index: usize) -> Self {
        Error::InvalidSlide {
            number: index + 1,
            source: Box::new(self),
        }
    }

    /// Check if this is a not-found read error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ContentRead { source, .. } | Error::Io(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Check if this error (or the error it wraps) is a structural violation.
    pub fn is_structural(&self) -> bool {
        match self {
            Error::Structural(_) => true,
            Error::InvalidSlide { source, .. } => source.is_structural(),
            _ => false,
        }
    }
}
