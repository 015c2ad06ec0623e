//! Read access to external markdown files and images.
//!
//! The classifier and the image inliner never touch the filesystem
//! directly. They go through a [`ContentSource`], so callers can embed the
//! pipeline somewhere without a real filesystem.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read interface used for external markdown files and images.
pub trait ContentSource: Send + Sync {
    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Read a file as raw bytes.
    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl std::fmt::Debug for dyn ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ContentSource")
    }
}

/// Content source backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// In-memory content source keyed by path.
///
/// Paths are compared component-wise, so `./img/a.png` and `img/a.png`
/// refer to the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(mut self, path: impl AsRef<Path>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl AsRef<Path>, data: impl Into<Vec<u8>>) {
        self.files.insert(normalize(path.as_ref()), data.into());
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the source holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn get(&self, path: &Path) -> io::Result<&Vec<u8>> {
        self.files.get(&normalize(path)).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}

impl ContentSource for MemorySource {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let data = self.get(path)?;
        String::from_utf8(data.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.get(path).cloned()
    }
}

/// Drop `.` components so lookups ignore `./` prefixes.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect()
}
