//! Range decomposition into renderable granules.
//!
//! # Responsibility
//! - Turn an arbitrary reference span into an ordered list of whole
//!   chapters and verse sub-ranges, for reading-list display and for
//!   generating clickable sub-targets.
//!
//! # Invariants
//! - Output preserves ascending chapter/verse order of the input span;
//!   no sorting, no deduplication across calls.
//! - Lookup failures degrade to an empty list for the affected
//!   sub-range; this module never returns an error and never panics.
//! - A cross-book span only visits its first and last book; books
//!   strictly between them are omitted (kept for compatibility with the
//!   established reading-plan output).

use crate::index::BibleIndex;
use crate::model::book::OsisBook;
use crate::model::ref_id::{Atom, ChapterId, RefIdInner};
use serde::{Deserialize, Serialize};

/// One renderable unit of a decomposed span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Granule {
    /// A whole chapter.
    Chapter { chapter: ChapterId },
    /// A verse sub-range within one chapter, `start..=end`, 1-based.
    Verse {
        chapter: ChapterId,
        start: u32,
        end: u32,
    },
}

impl Granule {
    /// The chapter this granule belongs to.
    pub fn chapter_id(&self) -> ChapterId {
        match self {
            Granule::Chapter { chapter } | Granule::Verse { chapter, .. } => *chapter,
        }
    }
}

/// Decomposes a single reference or range into granules.
///
/// Entry point used when flattening a reading plan (`Vec<RefId>`) into
/// one clickable list; callers needing a globally ordered list across
/// several references must sort the combined output themselves.
pub fn decompose_ref(id: &RefIdInner, index: &BibleIndex) -> Vec<Granule> {
    match id {
        RefIdInner::Single { atom } => decompose_atom(atom, index),
        RefIdInner::Range { from, to } => decompose_range(from, to, index),
    }
}

/// Decomposes a single atom into granules.
///
/// - Book atom: every chapter of the book in order, `[]` when the
///   edition lacks the book.
/// - Chapter atom: that one chapter.
/// - Verse or word atom: the single-verse sub-range `[verse, verse]`.
pub fn decompose_atom(atom: &Atom, index: &BibleIndex) -> Vec<Granule> {
    let book = atom.book();
    match (atom.chapter(), atom.verse()) {
        (None, _) => match index.chapter_count(book) {
            Some(count) => (1..=count)
                .map(|chapter| Granule::Chapter {
                    chapter: ChapterId { book, chapter },
                })
                .collect(),
            None => Vec::new(),
        },
        (Some(chapter), None) => vec![Granule::Chapter {
            chapter: ChapterId { book, chapter },
        }],
        (Some(chapter), Some(verse)) => vec![Granule::Verse {
            chapter: ChapterId { book, chapter },
            start: verse,
            end: verse,
        }],
    }
}

/// Decomposes the span between two atoms into granules.
///
/// Endpoints of any granularity are accepted; a missing chapter
/// defaults to 1 and word granularity is treated as its verse. Reversed
/// chapter spans decompose to `[]`.
pub fn decompose_range(from: &Atom, to: &Atom, index: &BibleIndex) -> Vec<Granule> {
    let start_book = from.book();
    let end_book = to.book();
    let start_chapter = from.chapter().unwrap_or(1);
    let end_chapter = to.chapter().unwrap_or(1);

    if start_book == end_book {
        let start_verse = from.verse();
        let end_verse = to.verse();

        if start_chapter == end_chapter && (start_verse.is_some() || end_verse.is_some()) {
            let start = start_verse.unwrap_or(1);
            let end = match end_verse {
                Some(verse) => verse,
                None => match index.last_verse_of(start_book, start_chapter) {
                    Some(last) => last,
                    // Edition lacks the book or the chapter.
                    None => return Vec::new(),
                },
            };
            return vec![Granule::Verse {
                chapter: ChapterId {
                    book: start_book,
                    chapter: start_chapter,
                },
                start,
                end,
            }];
        }

        return trimmed_chapter_run(
            start_book,
            start_chapter,
            end_chapter,
            start_verse,
            end_verse,
            index,
        );
    }

    // Split at book boundaries and recurse into the two edge books.
    // Books strictly between the endpoints are not visited.
    let mut granules = match index.chapter_count(start_book) {
        Some(last_chapter) => {
            let left_from = match from.verse() {
                Some(verse) => Atom::Verse {
                    book: start_book,
                    chapter: start_chapter,
                    verse,
                },
                None => Atom::Chapter {
                    book: start_book,
                    chapter: start_chapter,
                },
            };
            let left_to = Atom::Chapter {
                book: start_book,
                chapter: last_chapter,
            };
            decompose_range(&left_from, &left_to, index)
        }
        // Unknown start book: drop its sub-range, keep the end book's.
        None => Vec::new(),
    };

    let right_from = Atom::Chapter {
        book: end_book,
        chapter: 1,
    };
    let right_to = match to.verse() {
        Some(verse) => Atom::Verse {
            book: end_book,
            chapter: end_chapter,
            verse,
        },
        None => Atom::Chapter {
            book: end_book,
            chapter: end_chapter,
        },
    };
    granules.extend(decompose_range(&right_from, &right_to, index));
    granules
}

/// Emits one chapter granule per chapter in `start_chapter..=end_chapter`,
/// then trims the first slot to `[start_verse, end of chapter]` and the
/// last slot to `[1, end_verse]` where the endpoints carry verses.
///
/// When the run collapses to a single slot and both trims apply, the end
/// trim overwrites the start trim and the start-verse bound is lost. The
/// public range path never gets here in that state (a same-chapter span
/// with a verse endpoint takes the single-granule rule first), so the
/// slot behavior is kept as is.
fn trimmed_chapter_run(
    book: OsisBook,
    start_chapter: u32,
    end_chapter: u32,
    start_verse: Option<u32>,
    end_verse: Option<u32>,
    index: &BibleIndex,
) -> Vec<Granule> {
    if end_chapter < start_chapter {
        // Reversed span: degenerate, nothing to read.
        return Vec::new();
    }

    let mut granules: Vec<Granule> = (start_chapter..=end_chapter)
        .map(|chapter| Granule::Chapter {
            chapter: ChapterId { book, chapter },
        })
        .collect();

    if let Some(start) = start_verse {
        let end = match index.last_verse_of(book, start_chapter) {
            Some(last) => last,
            None => return Vec::new(),
        };
        granules[0] = Granule::Verse {
            chapter: ChapterId {
                book,
                chapter: start_chapter,
            },
            start,
            end,
        };
    }

    if let Some(end) = end_verse {
        let last_slot = granules.len() - 1;
        granules[last_slot] = Granule::Verse {
            chapter: granules[last_slot].chapter_id(),
            start: 1,
            end,
        };
    }

    granules
}
