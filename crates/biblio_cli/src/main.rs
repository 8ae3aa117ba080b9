//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `biblio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use biblio_core::model::book::OsisBook;
use biblio_core::model::ref_id::{Atom, RefId};

fn main() {
    println!("biblio_core ping={}", biblio_core::ping());
    println!("biblio_core version={}", biblio_core::core_version());

    // One fixed reference exercises the formatter end to end.
    let sample = RefId::range(
        Atom::Verse {
            book: OsisBook::Gen,
            chapter: 1,
            verse: 1,
        },
        Atom::Verse {
            book: OsisBook::Gen,
            chapter: 1,
            verse: 3,
        },
    );
    let name_of = |book: OsisBook| book.english_name().to_string();
    let edition_name_of = |id: &str| id.to_string();
    println!(
        "biblio_core sample={}",
        biblio_core::format_ref_id(&sample, &name_of, &edition_name_of)
    );
}
