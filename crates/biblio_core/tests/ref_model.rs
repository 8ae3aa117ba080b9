use biblio_core::model::book::OsisBook;
use biblio_core::model::history::{ModuleSelector, ViewHistoryEntry};
use biblio_core::model::ref_id::{Atom, ChapterId, RefId, RefIdInner};
use serde_json::json;

#[test]
fn atom_accessors_follow_granularity() {
    let word = Atom::Word {
        book: OsisBook::John,
        chapter: 3,
        verse: 16,
        word: 2,
    };
    assert_eq!(word.book(), OsisBook::John);
    assert_eq!(word.chapter(), Some(3));
    assert_eq!(word.verse(), Some(16));
    assert_eq!(word.word(), Some(2));

    let book = Atom::Book {
        book: OsisBook::Gen,
    };
    assert_eq!(book.chapter(), None);
    assert_eq!(book.verse(), None);
    assert_eq!(book.word(), None);
}

#[test]
fn atom_serialization_uses_expected_wire_fields() {
    let atom = Atom::Verse {
        book: OsisBook::Ps,
        chapter: 23,
        verse: 1,
    };

    let value = serde_json::to_value(&atom).unwrap();
    assert_eq!(
        value,
        json!({"type": "verse", "book": "Ps", "chapter": 23, "verse": 1})
    );

    let decoded: Atom = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, atom);
}

#[test]
fn ref_id_serialization_keeps_nullable_edition() {
    let pinned = RefId {
        bible: Some("kjv_eng".to_string()),
        id: RefIdInner::Single {
            atom: Atom::Chapter {
                book: OsisBook::Gen,
                chapter: 1,
            },
        },
    };
    let value = serde_json::to_value(&pinned).unwrap();
    assert_eq!(value["bible"], "kjv_eng");
    assert_eq!(value["id"]["type"], "single");
    assert_eq!(value["id"]["atom"]["type"], "chapter");

    let unpinned: RefId = serde_json::from_value(json!({
        "bible": null,
        "id": {
            "type": "range",
            "from": {"type": "book", "book": "Gen"},
            "to": {"type": "word", "book": "Exod", "chapter": 2, "verse": 3, "word": 4}
        }
    }))
    .unwrap();
    assert_eq!(unpinned.bible, None);
    match unpinned.id {
        RefIdInner::Range { from, to } => {
            // Degenerate book-to-word spans must survive the wire as is.
            assert_eq!(from.chapter(), None);
            assert_eq!(to.word(), Some(4));
        }
        RefIdInner::Single { .. } => panic!("expected range"),
    }
}

#[test]
fn history_entry_serialization_matches_stack_wire_shape() {
    let verse = ViewHistoryEntry::Verse {
        chapter: ChapterId {
            book: OsisBook::John,
            chapter: 3,
        },
        start: 16,
        end: None,
    };
    let value = serde_json::to_value(&verse).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "verse",
            "chapter": {"book": "John", "chapter": 3},
            "start": 16,
            "end": null
        })
    );

    let inspector = ViewHistoryEntry::ModuleInspector {
        module: "strongs_dict".to_string(),
        selector: ModuleSelector::Entry { id: 430 },
    };
    let value = serde_json::to_value(&inspector).unwrap();
    assert_eq!(value["type"], "module_inspector");
    assert_eq!(value["selector"], json!({"type": "entry", "id": 430}));

    let decoded: ViewHistoryEntry = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, inspector);
}

#[test]
fn chapter_and_verse_ids_render_with_english_names() {
    use biblio_core::model::ref_id::VerseId;

    let chapter = ChapterId {
        book: OsisBook::Gen,
        chapter: 2,
    };
    let verse = VerseId {
        book: OsisBook::John,
        chapter: 3,
        verse: 16,
    };
    assert_eq!(chapter.to_string(), "Genesis 2");
    assert_eq!(verse.to_string(), "John 3:16");
}

#[test]
fn ref_id_constructors_leave_edition_unpinned() {
    let atom = Atom::Book {
        book: OsisBook::Rev,
    };
    assert_eq!(RefId::single(atom).bible, None);
    assert_eq!(RefId::range(atom, atom).bible, None);
}
