//! Storage layer for daka
//!
//! A single human-readable JSON state file, rewritten in full with atomic
//! writes on every mutation.

pub mod file_io;
pub mod state;

pub use file_io::{read_json, write_json_atomic};
pub use state::{reconcile, Reconciliation, StateStore};
