//! Host-facing interop surface for the reference engine.
//!
//! # Responsibility
//! - Expose stable, use-case-level entry points to the UI shell over a
//!   JSON boundary.
//! - Keep error semantics simple: no panics across the boundary, typed
//!   errors for malformed input.

pub mod api;
pub mod commands;

pub use api::{core_version, init_logging, ping, CommandError, RefEngine};
pub use commands::{QueuedHistoryStore, QueuedSettingsStore, SettingsCommand, ViewHistoryCommand};
