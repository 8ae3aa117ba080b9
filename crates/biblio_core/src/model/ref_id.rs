//! Scripture address model.
//!
//! # Responsibility
//! - Define partial scripture addresses (`Atom`) at four granularities.
//! - Define single/range references (`RefIdInner`) and edition-pinned
//!   references (`RefId`).
//!
//! # Invariants
//! - Chapter, verse and word positions are 1-based.
//! - Validity against a concrete edition is not encoded in the types;
//!   lookups against a `BibleIndex` resolve it lazily and may fail.
//! - Ranges carry no `from <= to` or matching-granularity constraint;
//!   consumers must accept degenerate ranges without panicking.

use crate::model::book::OsisBook;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Address of one whole chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterId {
    pub book: OsisBook,
    pub chapter: u32,
}

impl Display for ChapterId {
    /// Default English rendering, e.g. `Genesis 2`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.book.english_name(), self.chapter)
    }
}

/// Address of one verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseId {
    pub book: OsisBook,
    pub chapter: u32,
    pub verse: u32,
}

impl Display for VerseId {
    /// Default English rendering, e.g. `John 3:16`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book.english_name(), self.chapter, self.verse)
    }
}

/// A partial scripture address of increasing specificity.
///
/// Each variant carries all fields of the coarser ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Atom {
    Book {
        book: OsisBook,
    },
    Chapter {
        book: OsisBook,
        chapter: u32,
    },
    Verse {
        book: OsisBook,
        chapter: u32,
        verse: u32,
    },
    Word {
        book: OsisBook,
        chapter: u32,
        verse: u32,
        word: u32,
    },
}

impl Atom {
    /// The book component, present at every granularity.
    pub fn book(&self) -> OsisBook {
        match self {
            Atom::Book { book }
            | Atom::Chapter { book, .. }
            | Atom::Verse { book, .. }
            | Atom::Word { book, .. } => *book,
        }
    }

    /// The chapter component, absent at book granularity.
    pub fn chapter(&self) -> Option<u32> {
        match self {
            Atom::Book { .. } => None,
            Atom::Chapter { chapter, .. }
            | Atom::Verse { chapter, .. }
            | Atom::Word { chapter, .. } => Some(*chapter),
        }
    }

    /// The verse component, present at verse and word granularity.
    pub fn verse(&self) -> Option<u32> {
        match self {
            Atom::Book { .. } | Atom::Chapter { .. } => None,
            Atom::Verse { verse, .. } | Atom::Word { verse, .. } => Some(*verse),
        }
    }

    /// The word component, present only at word granularity.
    pub fn word(&self) -> Option<u32> {
        match self {
            Atom::Word { word, .. } => Some(*word),
            _ => None,
        }
    }
}

/// A single address or a span between two addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RefIdInner {
    Single { atom: Atom },
    Range { from: Atom, to: Atom },
}

/// A reference, optionally pinned to a specific Bible edition.
///
/// `bible = None` means "use the caller-supplied default edition";
/// a pinned edition must be applied as a side effect when followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefId {
    pub bible: Option<String>,
    pub id: RefIdInner,
}

impl RefId {
    /// Wraps a single atom with no edition pin.
    pub fn single(atom: Atom) -> Self {
        Self {
            bible: None,
            id: RefIdInner::Single { atom },
        }
    }

    /// Wraps a range with no edition pin.
    pub fn range(from: Atom, to: Atom) -> Self {
        Self {
            bible: None,
            id: RefIdInner::Range { from, to },
        }
    }
}
