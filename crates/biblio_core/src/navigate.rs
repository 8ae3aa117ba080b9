//! Reference-click navigation mapping.
//!
//! # Responsibility
//! - Classify a clicked reference into exactly one history entry.
//! - Dispatch the edition switch and the history push to the injected
//!   store clients.
//!
//! # Invariants
//! - Classification is total: any atom combination, including malformed
//!   ranges, produces some entry and never panics.
//! - Per click, the settings write is dispatched before the history
//!   push; both are fire-and-forget with no atomicity across the pair.
//! - A pinned edition replaces `bible_version` only; every other
//!   settings field is carried over unchanged. The read-modify-write on
//!   the current settings is not retried on concurrent change.

use crate::model::history::{ModuleSelector, ViewHistoryEntry};
use crate::model::ref_id::{Atom, ChapterId, RefId, RefIdInner};
use log::debug;
use serde::{Deserialize, Serialize};

/// Display settings owned by the external settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub bible_version: String,
    pub parallel_version: String,
    pub parallel_enabled: bool,
    pub show_strongs: bool,
    pub shown_modules: Vec<String>,
}

/// A clicked in-text reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReferenceClick {
    /// A scripture reference, optionally pinned to an edition.
    RefId { value: RefId },
    /// A reference into a study module entry.
    ModuleRef { module: String, entry_id: u64 },
}

/// Client for the external display-settings store.
///
/// `set` is fire-and-forget: implementations forward to the host's
/// asynchronous store and return without waiting for completion.
pub trait SettingsStore {
    fn set(&self, settings: DisplaySettings);
}

/// Client for the external navigation-history stack.
///
/// `push` is fire-and-forget, like [`SettingsStore::set`].
pub trait HistoryStore {
    fn push(&self, entry: ViewHistoryEntry);
}

/// Handles one reference click end to end.
///
/// Module references push a module-inspector entry and touch nothing
/// else. Scripture references first apply a pinned edition (settings
/// write), then push the classified history entry.
pub fn on_reference_clicked(
    click: &ReferenceClick,
    current_settings: &DisplaySettings,
    settings_store: &dyn SettingsStore,
    history_store: &dyn HistoryStore,
) {
    match click {
        ReferenceClick::ModuleRef { module, entry_id } => {
            debug!("event=ref_click module=navigate kind=module_ref target={module}");
            history_store.push(ViewHistoryEntry::ModuleInspector {
                module: module.clone(),
                selector: ModuleSelector::Entry { id: *entry_id },
            });
        }
        ReferenceClick::RefId { value } => {
            if let Some(bible) = &value.bible {
                debug!("event=edition_switch module=navigate edition={bible}");
                settings_store.set(DisplaySettings {
                    bible_version: bible.clone(),
                    parallel_version: current_settings.parallel_version.clone(),
                    parallel_enabled: current_settings.parallel_enabled,
                    show_strongs: current_settings.show_strongs,
                    shown_modules: current_settings.shown_modules.clone(),
                });
            }

            let entry = classify(&value.id);
            debug!(
                "event=ref_click module=navigate kind=ref_id book={}",
                match &value.id {
                    RefIdInner::Single { atom } => atom.book(),
                    RefIdInner::Range { from, .. } => from.book(),
                }
            );
            history_store.push(entry);
        }
    }
}

/// Maps a reference to its single navigation target.
///
/// - Same-book, same-chapter range whose start carries a verse: verse
///   entry spanning the two verse bounds (`end` absent when the end
///   atom is chapter-level).
/// - Cross-book range: chapter entry at the start of the range; the end
///   atom and any verse component are discarded.
/// - Every other range falls back to its start atom.
/// - Single atoms map directly (a book opens at chapter 1).
pub fn classify(id: &RefIdInner) -> ViewHistoryEntry {
    match id {
        RefIdInner::Single { atom } => entry_for_atom(atom),
        RefIdInner::Range { from, to } => {
            let same_chapter = from.book() == to.book()
                && from.chapter().is_some()
                && from.chapter() == to.chapter();

            if same_chapter {
                if let (Some(chapter), Some(start)) = (from.chapter(), from.verse()) {
                    return ViewHistoryEntry::Verse {
                        chapter: ChapterId {
                            book: from.book(),
                            chapter,
                        },
                        start,
                        end: to.verse(),
                    };
                }
                return entry_for_atom(from);
            }

            if from.book() != to.book() {
                return ViewHistoryEntry::Chapter {
                    chapter: ChapterId {
                        book: from.book(),
                        chapter: from.chapter().unwrap_or(1),
                    },
                };
            }

            entry_for_atom(from)
        }
    }
}

fn entry_for_atom(atom: &Atom) -> ViewHistoryEntry {
    match atom {
        Atom::Book { book } => ViewHistoryEntry::Chapter {
            chapter: ChapterId {
                book: *book,
                chapter: 1,
            },
        },
        Atom::Chapter { book, chapter } => ViewHistoryEntry::Chapter {
            chapter: ChapterId {
                book: *book,
                chapter: *chapter,
            },
        },
        Atom::Verse {
            book,
            chapter,
            verse,
        }
        | Atom::Word {
            book,
            chapter,
            verse,
            ..
        } => ViewHistoryEntry::Verse {
            chapter: ChapterId {
                book: *book,
                chapter: *chapter,
            },
            start: *verse,
            end: None,
        },
    }
}
