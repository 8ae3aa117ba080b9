//! View-history entry model.
//!
//! # Responsibility
//! - Define the entries the external navigation history stack accepts.
//!
//! # Invariants
//! - Entries are created here but the stack itself (push/advance/retreat
//!   cursor semantics) lives in the host application, not in this crate.
//! - `Verse.end = None` means "a single verse", not "to end of chapter".

use crate::model::ref_id::ChapterId;
use serde::{Deserialize, Serialize};

/// Target inside a study module, for module-reference navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModuleSelector {
    Entry { id: u64 },
}

/// One entry on the external navigation history stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewHistoryEntry {
    Chapter {
        chapter: ChapterId,
    },
    Verse {
        chapter: ChapterId,
        start: u32,
        end: Option<u32>,
    },
    ModuleInspector {
        module: String,
        selector: ModuleSelector,
    },
}

/// Snapshot of the external history stack state.
///
/// Read-only from this crate's point of view; carried through the
/// interop boundary so the host can render back/forward affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewHistoryInfo {
    pub current: ViewHistoryEntry,
    pub index: u32,
    pub count: u32,
}
