//! Per-edition bible metadata index.
//!
//! # Responsibility
//! - Hold the ordered book list and per-chapter verse counts of one
//!   edition, plus display names for books and editions.
//! - Answer chapter/verse-count lookups for the formatter and the
//!   range decomposer.
//!
//! # Invariants
//! - Loaded once from the host metadata provider and immutable after.
//! - Chapters are 1-based; `verse_counts.len()` is the chapter count of
//!   that book in that edition (editions may disagree on counts).
//! - Every lookup returns `Option`; a missing book or out-of-range
//!   chapter is degraded by the caller, never raised as an error.

use crate::model::book::OsisBook;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One book of one edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    pub osis_book: OsisBook,
    /// Edition-local display name, e.g. "Genesis" or "1. Mose".
    pub display_name: String,
    /// Edition-local short form, e.g. "Gen" or "1Mo".
    pub abbreviation: String,
    /// `verse_counts[i]` is the verse count of chapter `i + 1`.
    pub verse_counts: Vec<u32>,
}

impl BookInfo {
    /// Chapter count of this book in this edition.
    pub fn chapter_count(&self) -> u32 {
        self.verse_counts.len() as u32
    }

    /// Verse count of a 1-based chapter, `None` when out of range.
    pub fn verse_count(&self, chapter: u32) -> Option<u32> {
        if chapter == 0 {
            return None;
        }
        self.verse_counts.get(chapter as usize - 1).copied()
    }
}

/// Book list and display metadata of one Bible edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleIndex {
    /// Edition display name, e.g. "King James Version".
    pub name: String,
    pub books: Vec<BookInfo>,
}

impl BibleIndex {
    /// Looks up a book by OSIS code within this edition.
    pub fn book(&self, book: OsisBook) -> Option<&BookInfo> {
        self.books.iter().find(|b| b.osis_book == book)
    }

    /// Chapter count of a book, `None` when the edition lacks the book.
    pub fn chapter_count(&self, book: OsisBook) -> Option<u32> {
        self.book(book).map(BookInfo::chapter_count)
    }

    /// Verse count of a 1-based chapter of a book.
    ///
    /// `None` when the edition lacks the book or the chapter exceeds the
    /// book's chapter count.
    pub fn last_verse_of(&self, book: OsisBook, chapter: u32) -> Option<u32> {
        self.book(book).and_then(|b| b.verse_count(chapter))
    }

    /// Edition-local book display name, falling back to the raw OSIS
    /// code when the edition lacks the book.
    pub fn book_display_name(&self, book: OsisBook) -> String {
        match self.book(book) {
            Some(info) => info.display_name.clone(),
            None => book.code().to_string(),
        }
    }
}

/// All loaded editions, keyed by edition id (e.g. `"kjv_eng"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleIndexSet {
    pub editions: HashMap<String, BibleIndex>,
}

impl BibleIndexSet {
    pub fn new(editions: HashMap<String, BibleIndex>) -> Self {
        Self { editions }
    }

    pub fn edition(&self, id: &str) -> Option<&BibleIndex> {
        self.editions.get(id)
    }

    /// Edition display name, falling back to the raw edition id.
    pub fn edition_display_name(&self, id: &str) -> String {
        match self.editions.get(id) {
            Some(index) => index.name.clone(),
            None => id.to_string(),
        }
    }
}
