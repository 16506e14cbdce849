use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A book of a Bible version, as far as the selector cares about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Numeric id used when packing a reference
    pub book_id: u32,

    /// Display abbreviation (e.g. "Gen", "1Co")
    pub short_name: String,

    /// Number of chapters
    pub chapter_count: usize,

    /// Verse count of every chapter, in chapter order
    pub verse_counts: Vec<usize>,
}

impl Book {
    pub fn new(book_id: u32, short_name: impl Into<String>, verse_counts: Vec<usize>) -> Self {
        Self {
            book_id,
            short_name: short_name.into(),
            chapter_count: verse_counts.len(),
            verse_counts,
        }
    }

    /// Verse count of a 0-based chapter index, or 0 when the chapter does not exist
    pub fn verse_count(&self, chapter_index: usize) -> usize {
        self.verse_counts.get(chapter_index).copied().unwrap_or(0)
    }
}

/// Supplier of the ordered book list of a Bible version
pub trait Version {
    /// Books in canon order with absent books skipped
    fn consecutive_books(&self) -> Arc<[Book]>;
}
