//! Human-readable reference formatting.
//!
//! # Responsibility
//! - Render atoms, references and granules as display strings, given
//!   injected book/edition name resolvers.
//!
//! # Invariants
//! - Pure, deterministic and total: every value formats to some string.
//! - Name resolvers own the fallback policy; resolvers built on a
//!   `BibleIndex` fall back to the default English name, and the
//!   edition resolver falls back to the raw edition id.
//! - Range collapsing rules apply in priority order; first match wins.

use crate::decompose::Granule;
use crate::model::book::OsisBook;
use crate::model::ref_id::{Atom, RefId, RefIdInner};

/// Formats a single atom.
///
/// `"Name"`, `"Name 3"`, `"Name 3:16"` or `"Name 3:16#2"` depending on
/// granularity.
pub fn format_atom<F>(atom: &Atom, name_of: &F) -> String
where
    F: Fn(OsisBook) -> String,
{
    match atom {
        Atom::Book { book } => name_of(*book),
        Atom::Chapter { book, chapter } => format!("{} {}", name_of(*book), chapter),
        Atom::Verse {
            book,
            chapter,
            verse,
        } => format!("{} {}:{}", name_of(*book), chapter, verse),
        Atom::Word {
            book,
            chapter,
            verse,
            word,
        } => format!("{} {}:{}#{}", name_of(*book), chapter, verse, word),
    }
}

/// Formats a reference, collapsing ranges where possible and appending
/// the pinned edition name in parentheses.
///
/// Collapsing, first match wins:
/// 1. verse-to-verse within one chapter -> `"Name 1:1-3"`
/// 2. chapter-to-chapter within one book -> `"Name 1-3"`
/// 3. anything else -> both endpoints in full, joined by `-`
pub fn format_ref_id<F, G>(ref_id: &RefId, name_of: &F, edition_name_of: &G) -> String
where
    F: Fn(OsisBook) -> String,
    G: Fn(&str) -> String,
{
    let body = format_ref_id_inner(&ref_id.id, name_of);
    match &ref_id.bible {
        Some(bible) => format!("{} ({})", body, edition_name_of(bible)),
        None => body,
    }
}

fn format_ref_id_inner<F>(id: &RefIdInner, name_of: &F) -> String
where
    F: Fn(OsisBook) -> String,
{
    match id {
        RefIdInner::Single { atom } => format_atom(atom, name_of),
        RefIdInner::Range { from, to } => match (from, to) {
            (
                Atom::Verse {
                    book: from_book,
                    chapter: from_chapter,
                    verse: from_verse,
                },
                Atom::Verse {
                    book: to_book,
                    chapter: to_chapter,
                    verse: to_verse,
                },
            ) if from_book == to_book
                && from_chapter == to_chapter
                && from_verse != to_verse =>
            {
                format!(
                    "{} {}:{}-{}",
                    name_of(*to_book),
                    to_chapter,
                    from_verse,
                    to_verse
                )
            }
            (
                Atom::Chapter {
                    book: from_book,
                    chapter: from_chapter,
                },
                Atom::Chapter {
                    book: to_book,
                    chapter: to_chapter,
                },
            ) if from_book == to_book && from_chapter != to_chapter => {
                format!("{} {}-{}", name_of(*to_book), from_chapter, to_chapter)
            }
            _ => format!(
                "{}-{}",
                format_atom(from, name_of),
                format_atom(to, name_of)
            ),
        },
    }
}

/// Formats one reading-list granule.
///
/// Chapter granule -> `"Name 3"`; verse granule -> `"Name 3:5"` when the
/// sub-range is a single verse, else `"Name 3:5-11"`.
pub fn format_granule<F>(granule: &Granule, name_of: &F) -> String
where
    F: Fn(OsisBook) -> String,
{
    match granule {
        Granule::Chapter { chapter } => {
            format!("{} {}", name_of(chapter.book), chapter.chapter)
        }
        Granule::Verse {
            chapter,
            start,
            end,
        } => {
            if start == end {
                format!("{} {}:{}", name_of(chapter.book), chapter.chapter, start)
            } else {
                format!(
                    "{} {}:{}-{}",
                    name_of(chapter.book),
                    chapter.chapter,
                    start,
                    end
                )
            }
        }
    }
}
