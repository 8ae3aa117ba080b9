//! Canonical OSIS book codes.
//!
//! # Responsibility
//! - Define the closed set of 66 canonical books in canonical order.
//! - Provide code/name lookups and testament classification.
//!
//! # Invariants
//! - Declaration order is the canonical order; `canon_index` is derived
//!   from it and never changes.
//! - Books with canon index < 39 are Old Testament, the rest New Testament.
//! - Wire form is the OSIS code string (`"Gen"`, `"1Sam"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of Old Testament books; the canon index split point.
pub const OLD_TESTAMENT_BOOKS: usize = 39;

/// One of the 66 canonical books, ordered canonically.
///
/// The variant order defines the book index used for testament
/// classification and book-to-book comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OsisBook {
    Gen,
    Exod,
    Lev,
    Num,
    Deut,
    Josh,
    Judg,
    Ruth,
    #[serde(rename = "1Sam")]
    Sam1,
    #[serde(rename = "2Sam")]
    Sam2,
    #[serde(rename = "1Kgs")]
    Kgs1,
    #[serde(rename = "2Kgs")]
    Kgs2,
    #[serde(rename = "1Chr")]
    Chr1,
    #[serde(rename = "2Chr")]
    Chr2,
    Ezra,
    Neh,
    Esth,
    Job,
    Ps,
    Prov,
    Eccl,
    Song,
    Isa,
    Jer,
    Lam,
    Ezek,
    Dan,
    Hos,
    Joel,
    Amos,
    Obad,
    Jonah,
    Mic,
    Nah,
    Hab,
    Zeph,
    Hag,
    Zech,
    Mal,
    Matt,
    Mark,
    Luke,
    John,
    Acts,
    Rom,
    #[serde(rename = "1Cor")]
    Cor1,
    #[serde(rename = "2Cor")]
    Cor2,
    Gal,
    Eph,
    Phil,
    Col,
    #[serde(rename = "1Thess")]
    Thess1,
    #[serde(rename = "2Thess")]
    Thess2,
    #[serde(rename = "1Tim")]
    Tim1,
    #[serde(rename = "2Tim")]
    Tim2,
    Titus,
    Phlm,
    Heb,
    Jas,
    #[serde(rename = "1Pet")]
    Pet1,
    #[serde(rename = "2Pet")]
    Pet2,
    #[serde(rename = "1John")]
    John1,
    #[serde(rename = "2John")]
    John2,
    #[serde(rename = "3John")]
    John3,
    Jude,
    Rev,
}

impl OsisBook {
    /// Every book in canonical order.
    pub const ALL: [OsisBook; 66] = [
        OsisBook::Gen,
        OsisBook::Exod,
        OsisBook::Lev,
        OsisBook::Num,
        OsisBook::Deut,
        OsisBook::Josh,
        OsisBook::Judg,
        OsisBook::Ruth,
        OsisBook::Sam1,
        OsisBook::Sam2,
        OsisBook::Kgs1,
        OsisBook::Kgs2,
        OsisBook::Chr1,
        OsisBook::Chr2,
        OsisBook::Ezra,
        OsisBook::Neh,
        OsisBook::Esth,
        OsisBook::Job,
        OsisBook::Ps,
        OsisBook::Prov,
        OsisBook::Eccl,
        OsisBook::Song,
        OsisBook::Isa,
        OsisBook::Jer,
        OsisBook::Lam,
        OsisBook::Ezek,
        OsisBook::Dan,
        OsisBook::Hos,
        OsisBook::Joel,
        OsisBook::Amos,
        OsisBook::Obad,
        OsisBook::Jonah,
        OsisBook::Mic,
        OsisBook::Nah,
        OsisBook::Hab,
        OsisBook::Zeph,
        OsisBook::Hag,
        OsisBook::Zech,
        OsisBook::Mal,
        OsisBook::Matt,
        OsisBook::Mark,
        OsisBook::Luke,
        OsisBook::John,
        OsisBook::Acts,
        OsisBook::Rom,
        OsisBook::Cor1,
        OsisBook::Cor2,
        OsisBook::Gal,
        OsisBook::Eph,
        OsisBook::Phil,
        OsisBook::Col,
        OsisBook::Thess1,
        OsisBook::Thess2,
        OsisBook::Tim1,
        OsisBook::Tim2,
        OsisBook::Titus,
        OsisBook::Phlm,
        OsisBook::Heb,
        OsisBook::Jas,
        OsisBook::Pet1,
        OsisBook::Pet2,
        OsisBook::John1,
        OsisBook::John2,
        OsisBook::John3,
        OsisBook::Jude,
        OsisBook::Rev,
    ];

    /// Zero-based position in the canonical order.
    pub fn canon_index(self) -> usize {
        self as usize
    }

    /// Whether this book belongs to the Old Testament.
    pub fn is_old_testament(self) -> bool {
        self.canon_index() < OLD_TESTAMENT_BOOKS
    }

    /// Whether this book belongs to the New Testament.
    pub fn is_new_testament(self) -> bool {
        !self.is_old_testament()
    }

    /// The OSIS code string for this book (`"Gen"`, `"1Sam"`, ...).
    pub fn code(self) -> &'static str {
        match self {
            OsisBook::Gen => "Gen",
            OsisBook::Exod => "Exod",
            OsisBook::Lev => "Lev",
            OsisBook::Num => "Num",
            OsisBook::Deut => "Deut",
            OsisBook::Josh => "Josh",
            OsisBook::Judg => "Judg",
            OsisBook::Ruth => "Ruth",
            OsisBook::Sam1 => "1Sam",
            OsisBook::Sam2 => "2Sam",
            OsisBook::Kgs1 => "1Kgs",
            OsisBook::Kgs2 => "2Kgs",
            OsisBook::Chr1 => "1Chr",
            OsisBook::Chr2 => "2Chr",
            OsisBook::Ezra => "Ezra",
            OsisBook::Neh => "Neh",
            OsisBook::Esth => "Esth",
            OsisBook::Job => "Job",
            OsisBook::Ps => "Ps",
            OsisBook::Prov => "Prov",
            OsisBook::Eccl => "Eccl",
            OsisBook::Song => "Song",
            OsisBook::Isa => "Isa",
            OsisBook::Jer => "Jer",
            OsisBook::Lam => "Lam",
            OsisBook::Ezek => "Ezek",
            OsisBook::Dan => "Dan",
            OsisBook::Hos => "Hos",
            OsisBook::Joel => "Joel",
            OsisBook::Amos => "Amos",
            OsisBook::Obad => "Obad",
            OsisBook::Jonah => "Jonah",
            OsisBook::Mic => "Mic",
            OsisBook::Nah => "Nah",
            OsisBook::Hab => "Hab",
            OsisBook::Zeph => "Zeph",
            OsisBook::Hag => "Hag",
            OsisBook::Zech => "Zech",
            OsisBook::Mal => "Mal",
            OsisBook::Matt => "Matt",
            OsisBook::Mark => "Mark",
            OsisBook::Luke => "Luke",
            OsisBook::John => "John",
            OsisBook::Acts => "Acts",
            OsisBook::Rom => "Rom",
            OsisBook::Cor1 => "1Cor",
            OsisBook::Cor2 => "2Cor",
            OsisBook::Gal => "Gal",
            OsisBook::Eph => "Eph",
            OsisBook::Phil => "Phil",
            OsisBook::Col => "Col",
            OsisBook::Thess1 => "1Thess",
            OsisBook::Thess2 => "2Thess",
            OsisBook::Tim1 => "1Tim",
            OsisBook::Tim2 => "2Tim",
            OsisBook::Titus => "Titus",
            OsisBook::Phlm => "Phlm",
            OsisBook::Heb => "Heb",
            OsisBook::Jas => "Jas",
            OsisBook::Pet1 => "1Pet",
            OsisBook::Pet2 => "2Pet",
            OsisBook::John1 => "1John",
            OsisBook::John2 => "2John",
            OsisBook::John3 => "3John",
            OsisBook::Jude => "Jude",
            OsisBook::Rev => "Rev",
        }
    }

    /// Parses an OSIS code string into a book.
    ///
    /// Returns `None` for unknown codes; callers fall back to the raw
    /// string where a display value is needed.
    pub fn from_code(code: &str) -> Option<OsisBook> {
        OsisBook::ALL.iter().copied().find(|b| b.code() == code)
    }

    /// Default English display name, used when no edition-specific
    /// name resolver is available.
    pub fn english_name(self) -> &'static str {
        match self {
            OsisBook::Gen => "Genesis",
            OsisBook::Exod => "Exodus",
            OsisBook::Lev => "Leviticus",
            OsisBook::Num => "Numbers",
            OsisBook::Deut => "Deuteronomy",
            OsisBook::Josh => "Joshua",
            OsisBook::Judg => "Judges",
            OsisBook::Ruth => "Ruth",
            OsisBook::Sam1 => "1 Samuel",
            OsisBook::Sam2 => "2 Samuel",
            OsisBook::Kgs1 => "1 Kings",
            OsisBook::Kgs2 => "2 Kings",
            OsisBook::Chr1 => "1 Chronicles",
            OsisBook::Chr2 => "2 Chronicles",
            OsisBook::Ezra => "Ezra",
            OsisBook::Neh => "Nehemiah",
            OsisBook::Esth => "Esther",
            OsisBook::Job => "Job",
            OsisBook::Ps => "Psalms",
            OsisBook::Prov => "Proverbs",
            OsisBook::Eccl => "Ecclesiastes",
            OsisBook::Song => "Song of Solomon",
            OsisBook::Isa => "Isaiah",
            OsisBook::Jer => "Jeremiah",
            OsisBook::Lam => "Lamentations",
            OsisBook::Ezek => "Ezekiel",
            OsisBook::Dan => "Daniel",
            OsisBook::Hos => "Hosea",
            OsisBook::Joel => "Joel",
            OsisBook::Amos => "Amos",
            OsisBook::Obad => "Obadiah",
            OsisBook::Jonah => "Jonah",
            OsisBook::Mic => "Micah",
            OsisBook::Nah => "Nahum",
            OsisBook::Hab => "Habakkuk",
            OsisBook::Zeph => "Zephaniah",
            OsisBook::Hag => "Haggai",
            OsisBook::Zech => "Zechariah",
            OsisBook::Mal => "Malachi",
            OsisBook::Matt => "Matthew",
            OsisBook::Mark => "Mark",
            OsisBook::Luke => "Luke",
            OsisBook::John => "John",
            OsisBook::Acts => "Acts",
            OsisBook::Rom => "Romans",
            OsisBook::Cor1 => "1 Corinthians",
            OsisBook::Cor2 => "2 Corinthians",
            OsisBook::Gal => "Galatians",
            OsisBook::Eph => "Ephesians",
            OsisBook::Phil => "Philippians",
            OsisBook::Col => "Colossians",
            OsisBook::Thess1 => "1 Thessalonians",
            OsisBook::Thess2 => "2 Thessalonians",
            OsisBook::Tim1 => "1 Timothy",
            OsisBook::Tim2 => "2 Timothy",
            OsisBook::Titus => "Titus",
            OsisBook::Phlm => "Philemon",
            OsisBook::Heb => "Hebrews",
            OsisBook::Jas => "James",
            OsisBook::Pet1 => "1 Peter",
            OsisBook::Pet2 => "2 Peter",
            OsisBook::John1 => "1 John",
            OsisBook::John2 => "2 John",
            OsisBook::John3 => "3 John",
            OsisBook::Jude => "Jude",
            OsisBook::Rev => "Revelation",
        }
    }
}

impl Display for OsisBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
