use biblio_core::format::{format_atom, format_granule, format_ref_id};
use biblio_core::index::{BibleIndex, BookInfo};
use biblio_core::model::book::OsisBook;
use biblio_core::model::ref_id::{Atom, ChapterId, RefId};
use biblio_core::Granule;

fn names(book: OsisBook) -> String {
    book.english_name().to_string()
}

fn editions(id: &str) -> String {
    match id {
        "kjv_eng" => "King James Version".to_string(),
        other => other.to_string(),
    }
}

#[test]
fn atoms_format_by_granularity() {
    let book = Atom::Book {
        book: OsisBook::Gen,
    };
    let chapter = Atom::Chapter {
        book: OsisBook::Gen,
        chapter: 3,
    };
    let verse = Atom::Verse {
        book: OsisBook::John,
        chapter: 3,
        verse: 16,
    };
    let word = Atom::Word {
        book: OsisBook::John,
        chapter: 3,
        verse: 16,
        word: 2,
    };

    assert_eq!(format_atom(&book, &names), "Genesis");
    assert_eq!(format_atom(&chapter, &names), "Genesis 3");
    assert_eq!(format_atom(&verse, &names), "John 3:16");
    assert_eq!(format_atom(&word, &names), "John 3:16#2");
}

#[test]
fn verse_range_within_chapter_collapses() {
    let ref_id = RefId::range(
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
    assert_eq!(format_ref_id(&ref_id, &names, &editions), "Genesis 1:1-3");
}

#[test]
fn chapter_range_within_book_collapses() {
    let ref_id = RefId::range(
        Atom::Chapter {
            book: OsisBook::Gen,
            chapter: 1,
        },
        Atom::Chapter {
            book: OsisBook::Gen,
            chapter: 3,
        },
    );
    assert_eq!(format_ref_id(&ref_id, &names, &editions), "Genesis 1-3");
}

#[test]
fn equal_verses_do_not_collapse() {
    let verse = Atom::Verse {
        book: OsisBook::Gen,
        chapter: 1,
        verse: 1,
    };
    let ref_id = RefId::range(verse, verse);
    assert_eq!(
        format_ref_id(&ref_id, &names, &editions),
        "Genesis 1:1-Genesis 1:1"
    );
}

#[test]
fn mixed_granularity_ranges_format_both_endpoints() {
    let ref_id = RefId::range(
        Atom::Verse {
            book: OsisBook::Gen,
            chapter: 1,
            verse: 5,
        },
        Atom::Chapter {
            book: OsisBook::Gen,
            chapter: 3,
        },
    );
    assert_eq!(
        format_ref_id(&ref_id, &names, &editions),
        "Genesis 1:5-Genesis 3"
    );
}

#[test]
fn cross_book_verse_ranges_format_both_endpoints() {
    let ref_id = RefId::range(
        Atom::Verse {
            book: OsisBook::Mal,
            chapter: 4,
            verse: 5,
        },
        Atom::Verse {
            book: OsisBook::Matt,
            chapter: 1,
            verse: 1,
        },
    );
    assert_eq!(
        format_ref_id(&ref_id, &names, &editions),
        "Malachi 4:5-Matthew 1:1"
    );
}

#[test]
fn pinned_edition_is_appended_in_parentheses() {
    let mut ref_id = RefId::single(Atom::Chapter {
        book: OsisBook::Gen,
        chapter: 1,
    });
    ref_id.bible = Some("kjv_eng".to_string());
    assert_eq!(
        format_ref_id(&ref_id, &names, &editions),
        "Genesis 1 (King James Version)"
    );

    // An unknown edition id falls back to the raw id via the resolver.
    ref_id.bible = Some("unknown_ed".to_string());
    assert_eq!(
        format_ref_id(&ref_id, &names, &editions),
        "Genesis 1 (unknown_ed)"
    );
}

#[test]
fn index_name_resolver_falls_back_to_raw_code() {
    let index = BibleIndex {
        name: "Tiny".to_string(),
        books: vec![BookInfo {
            osis_book: OsisBook::Gen,
            display_name: "1. Mose".to_string(),
            abbreviation: "1Mo".to_string(),
            verse_counts: vec![31],
        }],
    };
    let name_of = |book: OsisBook| index.book_display_name(book);

    let known = Atom::Chapter {
        book: OsisBook::Gen,
        chapter: 1,
    };
    let missing = Atom::Chapter {
        book: OsisBook::Rev,
        chapter: 1,
    };
    assert_eq!(format_atom(&known, &name_of), "1. Mose 1");
    assert_eq!(format_atom(&missing, &name_of), "Rev 1");
}

#[test]
fn granules_format_as_reading_rows() {
    let chapter = Granule::Chapter {
        chapter: ChapterId {
            book: OsisBook::Gen,
            chapter: 2,
        },
    };
    let span = Granule::Verse {
        chapter: ChapterId {
            book: OsisBook::Gen,
            chapter: 2,
        },
        start: 5,
        end: 11,
    };
    let single = Granule::Verse {
        chapter: ChapterId {
            book: OsisBook::Gen,
            chapter: 2,
        },
        start: 5,
        end: 5,
    };

    assert_eq!(format_granule(&chapter, &names), "Genesis 2");
    assert_eq!(format_granule(&span, &names), "Genesis 2:5-11");
    assert_eq!(format_granule(&single, &names), "Genesis 2:5");
}
