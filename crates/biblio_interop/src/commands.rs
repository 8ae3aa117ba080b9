//! Wire commands for the host's mutable stores.
//!
//! # Responsibility
//! - Model the command unions the external settings store and view
//!   history stack accept.
//! - Provide queue-backed store clients that serialize engine dispatches
//!   for the host RPC pump.
//!
//! # Invariants
//! - Store clients are fire-and-forget: a failed enqueue is logged and
//!   dropped, never surfaced to the click path.
//! - Commands from one click are enqueued in dispatch order (settings
//!   before history), but the host gives no atomicity across the pair.

use biblio_core::model::history::ViewHistoryEntry;
use biblio_core::navigate::{DisplaySettings, HistoryStore, SettingsStore};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;

/// Commands accepted by the external view-history stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewHistoryCommand {
    Push { entry: ViewHistoryEntry },
    Clear,
    Advance,
    Retreat,
    GetInfo,
}

/// Commands accepted by the external display-settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SettingsCommand {
    Get,
    Set { value: DisplaySettings },
}

/// History client that enqueues serialized commands for the host pump.
pub struct QueuedHistoryStore {
    tx: Sender<String>,
}

impl QueuedHistoryStore {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl HistoryStore for QueuedHistoryStore {
    fn push(&self, entry: ViewHistoryEntry) {
        match serde_json::to_string(&ViewHistoryCommand::Push { entry }) {
            Ok(json) => {
                if self.tx.send(json).is_err() {
                    warn!("event=history_push module=interop status=dropped reason=queue_closed");
                }
            }
            Err(err) => {
                warn!("event=history_push module=interop status=dropped reason=encode err={err}");
            }
        }
    }
}

/// Settings client that enqueues serialized commands for the host pump.
pub struct QueuedSettingsStore {
    tx: Sender<String>,
}

impl QueuedSettingsStore {
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx }
    }
}

impl SettingsStore for QueuedSettingsStore {
    fn set(&self, settings: DisplaySettings) {
        match serde_json::to_string(&SettingsCommand::Set { value: settings }) {
            Ok(json) => {
                if self.tx.send(json).is_err() {
                    warn!("event=settings_set module=interop status=dropped reason=queue_closed");
                }
            }
            Err(err) => {
                warn!("event=settings_set module=interop status=dropped reason=encode err={err}");
            }
        }
    }
}
