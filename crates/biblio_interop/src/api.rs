//! Use-case API for host-shell calls.
//!
//! # Responsibility
//! - Expose engine operations over a JSON string boundary.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the boundary.
//! - Return values are UTF-8 strings with stable meaning.
//! - The metadata set is loaded once per engine and never mutated.

use biblio_core::format::{format_granule, format_ref_id};
use biblio_core::index::BibleIndexSet;
use biblio_core::model::ref_id::RefId;
use biblio_core::navigate::{
    on_reference_clicked, DisplaySettings, HistoryStore, ReferenceClick, SettingsStore,
};
use biblio_core::{decompose_ref, Granule, OsisBook};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimal health-check API for host smoke integration.
///
/// Never panics; always returns a UTF-8 string.
pub fn ping() -> String {
    biblio_core::ping().to_owned()
}

/// Exposes the core crate version through the boundary.
pub fn core_version() -> String {
    biblio_core::core_version().to_owned()
}

/// Initializes engine logging once per process.
///
/// Returns an empty string on success and a human-readable message on
/// failure; repeated calls with the same configuration are idempotent.
pub fn init_logging(level: &str, log_dir: &str) -> String {
    match biblio_core::init_logging(level, log_dir) {
        Ok(()) => String::new(),
        Err(message) => message,
    }
}

/// Boundary error for engine commands.
#[derive(Debug)]
pub enum CommandError {
    /// Command payload is not valid JSON for the expected shape.
    BadCommand(serde_json::Error),
    /// No metadata was loaded for the requested edition id.
    UnknownEdition(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadCommand(err) => write!(f, "malformed command payload: {err}"),
            Self::UnknownEdition(id) => write!(f, "unknown bible edition: `{id}`"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BadCommand(err) => Some(err),
            Self::UnknownEdition(_) => None,
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(value: serde_json::Error) -> Self {
        Self::BadCommand(value)
    }
}

/// One row of a rendered reading list: display label plus the granule
/// the row navigates to when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingRow {
    pub label: String,
    pub granule: Granule,
}

/// Engine instance bound to loaded edition metadata and the host's two
/// store clients.
pub struct RefEngine {
    indexes: BibleIndexSet,
    settings_store: Box<dyn SettingsStore>,
    history_store: Box<dyn HistoryStore>,
}

impl RefEngine {
    /// Builds an engine from the host metadata payload.
    ///
    /// `metadata_json` is the serialized `BibleIndexSet` the backend
    /// provider returns at startup.
    pub fn from_metadata_json(
        metadata_json: &str,
        settings_store: Box<dyn SettingsStore>,
        history_store: Box<dyn HistoryStore>,
    ) -> Result<Self, CommandError> {
        let indexes: BibleIndexSet = serde_json::from_str(metadata_json)?;
        Ok(Self {
            indexes,
            settings_store,
            history_store,
        })
    }

    pub fn indexes(&self) -> &BibleIndexSet {
        &self.indexes
    }

    /// Formats a serialized `RefId` for display.
    ///
    /// Book names resolve against the reference's pinned edition when
    /// present, else against `default_bible`; an unknown edition falls
    /// back to default English book names and the raw edition id.
    pub fn format(&self, default_bible: &str, ref_id_json: &str) -> Result<String, CommandError> {
        let ref_id: RefId = serde_json::from_str(ref_id_json)?;
        let edition_id = ref_id.bible.as_deref().unwrap_or(default_bible);
        let edition = self.indexes.edition(edition_id);

        let name_of = |book: OsisBook| match edition {
            Some(index) => index.book_display_name(book),
            None => book.english_name().to_string(),
        };
        let edition_name_of = |id: &str| self.indexes.edition_display_name(id);

        Ok(format_ref_id(&ref_id, &name_of, &edition_name_of))
    }

    /// Flattens serialized reading-plan references (`Vec<RefId>`) into
    /// labelled, clickable rows for one edition.
    ///
    /// Returns the rows as a JSON array; references the edition cannot
    /// resolve contribute no rows.
    pub fn reading_list(&self, bible_id: &str, ref_ids_json: &str) -> Result<String, CommandError> {
        let index = self
            .indexes
            .edition(bible_id)
            .ok_or_else(|| CommandError::UnknownEdition(bible_id.to_string()))?;
        let refs: Vec<RefId> = serde_json::from_str(ref_ids_json)?;

        let name_of = |book: OsisBook| index.book_display_name(book);
        let rows: Vec<ReadingRow> = refs
            .iter()
            .flat_map(|r| decompose_ref(&r.id, index))
            .map(|granule| ReadingRow {
                label: format_granule(&granule, &name_of),
                granule,
            })
            .collect();

        Ok(serde_json::to_string(&rows)?)
    }

    /// Handles one serialized reference click.
    ///
    /// `settings_json` is the host's current display settings snapshot;
    /// the dispatches themselves are fire-and-forget through the bound
    /// store clients.
    pub fn click(&self, click_json: &str, settings_json: &str) -> Result<(), CommandError> {
        let click: ReferenceClick = serde_json::from_str(click_json)?;
        let settings: DisplaySettings = serde_json::from_str(settings_json)?;
        on_reference_clicked(
            &click,
            &settings,
            self.settings_store.as_ref(),
            self.history_store.as_ref(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RefEngine;
    use crate::commands::{QueuedHistoryStore, QueuedSettingsStore};
    use std::sync::mpsc::channel;

    const METADATA_JSON: &str = r#"{
        "editions": {
            "kjv_eng": {
                "name": "King James Version",
                "books": [
                    {
                        "osis_book": "Gen",
                        "display_name": "Genesis",
                        "abbreviation": "Gen",
                        "verse_counts": [31, 25, 24, 26]
                    }
                ]
            }
        }
    }"#;

    fn engine() -> (RefEngine, std::sync::mpsc::Receiver<String>) {
        let (tx, rx) = channel();
        let engine = RefEngine::from_metadata_json(
            METADATA_JSON,
            Box::new(QueuedSettingsStore::new(tx.clone())),
            Box::new(QueuedHistoryStore::new(tx)),
        )
        .expect("metadata should parse");
        (engine, rx)
    }

    #[test]
    fn format_resolves_edition_names() {
        let (engine, _rx) = engine();
        let json = r#"{
            "bible": "kjv_eng",
            "id": {"type": "single", "atom": {"type": "chapter", "book": "Gen", "chapter": 1}}
        }"#;

        let formatted = engine.format("kjv_eng", json).expect("format should succeed");
        assert_eq!(formatted, "Genesis 1 (King James Version)");
    }

    #[test]
    fn reading_list_labels_granules() {
        let (engine, _rx) = engine();
        let json = r#"[{
            "bible": null,
            "id": {
                "type": "range",
                "from": {"type": "chapter", "book": "Gen", "chapter": 1},
                "to": {"type": "chapter", "book": "Gen", "chapter": 2}
            }
        }]"#;

        let rows = engine
            .reading_list("kjv_eng", json)
            .expect("reading list should succeed");
        let value: serde_json::Value = serde_json::from_str(&rows).expect("rows should be JSON");
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[0]["label"], "Genesis 1");
        assert_eq!(value[1]["granule"]["chapter"]["chapter"], 2);
    }

    #[test]
    fn click_with_pinned_edition_enqueues_settings_then_history() {
        let (engine, rx) = engine();
        let click = r#"{
            "type": "ref_id",
            "value": {
                "bible": "asv_eng",
                "id": {"type": "single", "atom": {"type": "verse", "book": "Gen", "chapter": 1, "verse": 3}}
            }
        }"#;
        let settings = r#"{
            "bible_version": "kjv_eng",
            "parallel_version": "kjv_eng",
            "parallel_enabled": true,
            "show_strongs": false,
            "shown_modules": ["strongs_dict"]
        }"#;

        engine.click(click, settings).expect("click should succeed");

        let first = rx.recv().expect("settings command expected");
        assert!(first.contains("\"set\""));
        assert!(first.contains("\"asv_eng\""));
        assert!(first.contains("\"parallel_enabled\":true"));

        let second = rx.recv().expect("history command expected");
        assert!(second.contains("\"push\""));
        assert!(second.contains("\"verse\""));
    }

    #[test]
    fn malformed_click_payload_is_a_typed_error() {
        let (engine, _rx) = engine();
        let err = engine
            .click("{not json}", "{}")
            .expect_err("malformed payload must fail");
        assert!(err.to_string().contains("malformed command payload"));
    }

    #[test]
    fn unknown_edition_is_reported() {
        let (engine, _rx) = engine();
        let err = engine
            .reading_list("missing_ed", "[]")
            .expect_err("unknown edition must fail");
        assert!(err.to_string().contains("missing_ed"));
    }
}
