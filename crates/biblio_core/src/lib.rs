//! Scripture reference and range resolution engine.
//! This crate is the single source of truth for reference semantics:
//! the address model, display formatting, range decomposition and
//! click-to-navigation mapping. Rendering, search execution and audio
//! live in the host application, on the far side of the interop layer.

pub mod decompose;
pub mod format;
pub mod index;
pub mod logging;
pub mod model;
pub mod navigate;

pub use decompose::{decompose_atom, decompose_range, decompose_ref, Granule};
pub use format::{format_atom, format_granule, format_ref_id};
pub use index::{BibleIndex, BibleIndexSet, BookInfo};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::OsisBook;
pub use model::history::{ModuleSelector, ViewHistoryEntry, ViewHistoryInfo};
pub use model::ref_id::{Atom, ChapterId, RefId, RefIdInner, VerseId};
pub use navigate::{
    classify, on_reference_clicked, DisplaySettings, HistoryStore, ReferenceClick, SettingsStore,
};

/// Minimal health-check API for early host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
