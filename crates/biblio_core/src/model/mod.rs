//! Domain model for scripture references.
//!
//! # Responsibility
//! - Define canonical data structures shared by formatting, range
//!   decomposition and navigation mapping.
//!
//! # Invariants
//! - All positions (chapter, verse, word) are 1-based.
//! - Model types never validate against a concrete edition; the
//!   `BibleIndex` lookups do, lazily and fallibly.

pub mod book;
pub mod history;
pub mod ref_id;
