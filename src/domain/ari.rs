//! Packed Bible reference ("ARI")
//!
//! A reference is stored as a single integer with one byte each for the book
//! id, chapter and verse: `0x00BBCCVV`.

use serde::{Deserialize, Serialize};

/// A packed (book, chapter, verse) reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ari(u32);

impl Ari {
    /// Pack a book id, 1-based chapter and 1-based verse.
    ///
    /// Each component is truncated to its low byte.
    pub fn encode(book_id: u32, chapter: u32, verse: u32) -> Self {
        Self(((book_id & 0xff) << 16) | ((chapter & 0xff) << 8) | (verse & 0xff))
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn book_id(self) -> u32 {
        (self.0 >> 16) & 0xff
    }

    pub fn chapter(self) -> u32 {
        (self.0 >> 8) & 0xff
    }

    pub fn verse(self) -> u32 {
        self.0 & 0xff
    }
}

impl std::fmt::Display for Ari {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.book_id(), self.chapter(), self.verse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        assert_eq!(Ari::encode(0, 1, 1).raw(), 0x00_01_01);
        assert_eq!(Ari::encode(42, 3, 16).raw(), 0x2a_03_10);
    }

    #[test]
    fn test_components_truncate_to_a_byte() {
        let ari = Ari::encode(0x1ff, 0x102, 0x103);
        assert_eq!(ari.book_id(), 0xff);
        assert_eq!(ari.chapter(), 2);
        assert_eq!(ari.verse(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ari::encode(18, 23, 1).to_string(), "18:23:1");
    }
}
