//! Canon files: the book list of a version loaded from TOML or JSON
//!
//! ```toml
//! name = "My version"
//!
//! [[books]]
//! book_id = 7
//! short_name = "Rut"
//! verse_counts = [22, 23, 18, 22]
//! ```
//!
//! `chapter_count` may be given explicitly; it must then agree with
//! `verse_counts`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use super::book::{Book, Version};

const SAMPLE_CANON: &str = include_str!("../../assets/sample_canon.toml");

/// Error type for canon loading
#[derive(Debug, thiserror::Error)]
pub enum CanonError {
    #[error("Failed to read canon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported canon file extension: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Canon contains no books")]
    Empty,

    #[error("Book {0} has no chapters")]
    NoChapters(String),

    #[error("Book {short_name} declares {chapter_count} chapters but lists {verse_counts} verse counts")]
    ChapterCountMismatch {
        short_name: String,
        chapter_count: usize,
        verse_counts: usize,
    },

    #[error("Book id {0} appears more than once")]
    DuplicateBookId(u32),

    #[error("Book id {0} does not fit in a packed reference (max 255)")]
    BookIdOutOfRange(u32),
}

#[derive(Debug, Deserialize)]
struct CanonFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    books: Vec<BookEntry>,
}

#[derive(Debug, Deserialize)]
struct BookEntry {
    book_id: u32,
    short_name: String,
    #[serde(default)]
    chapter_count: Option<usize>,
    verse_counts: Vec<usize>,
}

/// An in-memory book list that serves as a [`Version`]
#[derive(Debug, Clone)]
pub struct Canon {
    name: String,
    books: Arc<[Book]>,
}

impl Canon {
    /// Build a canon from already-validated books
    pub fn new(name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            books: books.into(),
        }
    }

    /// The small canon bundled with the binary
    pub fn sample() -> Result<Self, CanonError> {
        Self::from_toml_str(SAMPLE_CANON)
    }

    /// Load a canon file; the format is chosen by extension (`.toml` or `.json`)
    pub fn from_file(path: &Path) -> Result<Self, CanonError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(CanonError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CanonError> {
        let file: CanonFile = toml::from_str(content)?;
        Self::from_parsed(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CanonError> {
        let file: CanonFile = serde_json::from_str(content)?;
        Self::from_parsed(file)
    }

    fn from_parsed(file: CanonFile) -> Result<Self, CanonError> {
        if file.books.is_empty() {
            return Err(CanonError::Empty);
        }

        let mut seen = HashSet::new();
        let mut books = Vec::with_capacity(file.books.len());

        for entry in file.books {
            if entry.book_id > 0xff {
                return Err(CanonError::BookIdOutOfRange(entry.book_id));
            }
            if !seen.insert(entry.book_id) {
                return Err(CanonError::DuplicateBookId(entry.book_id));
            }
            if entry.verse_counts.is_empty() {
                return Err(CanonError::NoChapters(entry.short_name));
            }
            if let Some(chapter_count) = entry.chapter_count {
                if chapter_count != entry.verse_counts.len() {
                    return Err(CanonError::ChapterCountMismatch {
                        short_name: entry.short_name,
                        chapter_count,
                        verse_counts: entry.verse_counts.len(),
                    });
                }
            }

            books.push(Book::new(entry.book_id, entry.short_name, entry.verse_counts));
        }

        Ok(Self::new(file.name, books))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl Version for Canon {
    fn consecutive_books(&self) -> Arc<[Book]> {
        Arc::clone(&self.books)
    }
}
