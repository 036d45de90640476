//! Core data models for daka
//!
//! Money, calendar period keys and the persisted punch record.

pub mod money;
pub mod period;
pub mod record;

pub use money::Money;
pub use period::{DayKey, MonthKey, PeriodParseError};
pub use record::{
    DailyState, PunchOutcome, PunchRecord, Rules, StoredRecord, SuspectOutcome, TodayTally,
};
