//! Calendar period keys
//!
//! `MonthKey` identifies an accounting month ("2025-01") and `DayKey` a single
//! day ("2025-01-15"). Both serialize as their string form so the state file
//! stays human-readable, but compare as calendar values.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An accounting month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = PeriodParseError;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

/// A single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = PeriodParseError;

    /// Parse "YYYY-MM-DD"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))
    }
}

impl TryFrom<String> for DayKey {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_ordering_is_calendar_order() {
        let a = MonthKey::new(2024, 12).unwrap();
        let b = MonthKey::new(2025, 2).unwrap();
        let c = MonthKey::new(2025, 10).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_from_date() {
        assert_eq!(
            MonthKey::from_date(date(2024, 12, 31)),
            MonthKey::new(2024, 12).unwrap()
        );
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            "2025-03".parse::<MonthKey>().unwrap(),
            MonthKey::new(2025, 3).unwrap()
        );
        assert_eq!(
            "2025-13".parse::<MonthKey>(),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!("March".parse::<MonthKey>().is_err());
        assert!("".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthKey::new(2025, 1).unwrap().to_string(), "2025-01");
        assert_eq!(DayKey::new(date(2025, 1, 5)).to_string(), "2025-01-05");
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(
            "2025-02-28".parse::<DayKey>().unwrap(),
            DayKey::new(date(2025, 2, 28))
        );
        assert!("2025-02-30".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let month = MonthKey::new(2025, 1).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2025-01\"");

        let day: DayKey = serde_json::from_str("\"2025-01-31\"").unwrap();
        assert_eq!(day, DayKey::new(date(2025, 1, 31)));

        assert!(serde_json::from_str::<MonthKey>("\"garbage\"").is_err());
    }
}
