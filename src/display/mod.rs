//! Terminal display formatting
//!
//! Turns records and projections into printable text. Nothing here reads the
//! clock or the filesystem.

pub mod report;
pub mod status;

pub use report::Palette;
pub use status::{format_history, format_punch_outcome, format_status, format_suspect_outcome};
