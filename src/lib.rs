//! daka - attendance punch tracker with a monthly earnings projection
//!
//! Each confirmed punch is worth a fixed price, at most a fixed number of
//! punches count per day, and the month's pay is capped. The state lives in a
//! single JSON file that rotates into an archived history when the month
//! changes. Each run prints how much is secured, the best total still
//! reachable, and how many punches, absences or weekend makeups remain.
//!
//! # Architecture
//!
//! - `config`: data directory and user settings
//! - `error`: custom error types
//! - `models`: money, period keys and the punch record
//! - `storage`: JSON state file with atomic writes and monthly rotation
//! - `services`: calendar arithmetic, projection and punch registration
//! - `display`: terminal formatting
//! - `cli`: argument dispatch for the `dk` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use daka::models::Rules;
//! use daka::services::Projection;
//! use daka::storage::StateStore;
//!
//! let today = Local::now().date_naive();
//! let store = StateStore::new("daka_status.json".into(), Rules::DEFAULT);
//! let record = store.load(today)?;
//! let projection = Projection::compute(&record, today, store.rules());
//! println!("{} / {}", projection.real_money, projection.dynamic_ceiling);
//! # Ok::<(), daka::DakaError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{DakaError, DakaResult};
