//! The persisted punch record
//!
//! `PunchRecord` is the single live state container. `StoredRecord` is the
//! shape read back from disk: every field is optional or defaulted and a
//! malformed field degrades to its default instead of failing the whole file.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::money::Money;
use super::period::{DayKey, MonthKey};
use crate::error::{DakaError, DakaResult};

/// Pay rules for a month of punches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Monthly ceiling on payable money
    pub cap: Money,
    /// Money earned per valid punch
    pub price: Money,
    /// Valid punches allowed per day
    pub max_daily: u32,
}

impl Rules {
    pub const DEFAULT: Rules = Rules {
        cap: Money::new(1000),
        price: Money::new(20),
        max_daily: 2,
    };

    /// Create a validated rule set
    pub fn new(cap: Money, price: Money, max_daily: u32) -> DakaResult<Self> {
        if !price.is_positive() {
            return Err(DakaError::Validation(format!(
                "Price must be positive, got {}",
                price
            )));
        }
        if cap.is_negative() {
            return Err(DakaError::Validation(format!(
                "Cap must not be negative, got {}",
                cap
            )));
        }
        if max_daily == 0 {
            return Err(DakaError::Validation(
                "Daily punch limit must be at least 1".into(),
            ));
        }
        Ok(Self {
            cap,
            price,
            max_daily,
        })
    }

    /// Punches needed to reach the cap (integer division)
    pub fn punches_for_cap(&self) -> u32 {
        self.cap.units_floor(self.price).clamp(0, u32::MAX as i64) as u32
    }

    /// Money actually paid for `punches`, capped
    pub fn payable(&self, punches: u32) -> Money {
        self.price.times(punches).min(self.cap)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Punches registered for the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayTally {
    pub date: DayKey,
    pub count: u32,
}

impl TodayTally {
    /// A fresh tally for `date`
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            date: DayKey::new(date),
            count: 0,
        }
    }
}

/// Whether more strict punches are accepted today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyState {
    Normal,
    DailyLimitReached,
}

/// Result of a strict punch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchOutcome {
    /// The punch counted; carries the state after the increment
    Recorded(DailyState),
    /// The daily limit was already reached; nothing changed
    Ignored,
}

/// Result of recording a suspect time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspectOutcome {
    Saved,
    Duplicate,
}

/// The live punch record for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchRecord {
    /// Accounting month this record belongs to
    pub month: MonthKey,

    /// Confirmed punches this month
    pub total_valid_punches: u32,

    /// Free-text times awaiting confirmation, insertion ordered and unique
    pub suspect_times: Vec<String>,

    /// Tally for the current day
    pub today: TodayTally,

    /// Archived real money per past month, written once at rotation
    pub history: BTreeMap<MonthKey, Money>,
}

impl PunchRecord {
    /// A fresh record for the month containing `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: MonthKey::from_date(today),
            total_valid_punches: 0,
            suspect_times: Vec::new(),
            today: TodayTally::fresh(today),
            history: BTreeMap::new(),
        }
    }

    /// A fresh record carrying forward archived history
    pub fn with_history(today: NaiveDate, history: BTreeMap<MonthKey, Money>) -> Self {
        Self {
            history,
            ..Self::new(today)
        }
    }

    /// Uncapped money for this month's punches
    pub fn raw_money(&self, rules: &Rules) -> Money {
        rules.price.times(self.total_valid_punches)
    }

    /// Money actually payable this month
    pub fn real_money(&self, rules: &Rules) -> Money {
        rules.payable(self.total_valid_punches)
    }

    pub fn daily_state(&self, rules: &Rules) -> DailyState {
        if self.today.count >= rules.max_daily {
            DailyState::DailyLimitReached
        } else {
            DailyState::Normal
        }
    }

    /// Count one strict punch unless today's limit is already reached
    pub fn register_strict(&mut self, rules: &Rules) -> PunchOutcome {
        if self.daily_state(rules) == DailyState::DailyLimitReached {
            return PunchOutcome::Ignored;
        }

        self.total_valid_punches = self.total_valid_punches.saturating_add(1);
        self.today.count += 1;
        PunchOutcome::Recorded(self.daily_state(rules))
    }

    /// Remember a suspect time; never counts toward valid punches
    pub fn register_suspect(&mut self, label: &str) -> SuspectOutcome {
        if self.suspect_times.iter().any(|t| t == label) {
            return SuspectOutcome::Duplicate;
        }

        self.suspect_times.push(label.to_string());
        SuspectOutcome::Saved
    }
}

/// A punch record as found on disk
///
/// Missing or malformed fields default; `month` and `today` stay `None` when
/// they cannot be read so reconciliation can tell "absent" from "stale".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub month: Option<MonthKey>,

    #[serde(default, deserialize_with = "lenient")]
    pub total_valid_punches: u32,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub suspect_times: Vec<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub today: Option<TodayTally>,

    #[serde(default, deserialize_with = "lenient_history")]
    pub history: BTreeMap<MonthKey, Money>,
}

impl From<PunchRecord> for StoredRecord {
    fn from(record: PunchRecord) -> Self {
        Self {
            month: Some(record.month),
            total_valid_punches: record.total_valid_punches,
            suspect_times: record.suspect_times,
            today: Some(record.today),
            history: record.history,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .filter(|s| seen.insert(s.clone()))
        .collect())
}

fn lenient_history<'de, D>(deserializer: D) -> Result<BTreeMap<MonthKey, Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, amount)| {
            let month = key.parse::<MonthKey>().ok()?;
            let amount = amount.as_i64()?;
            Some((month, Money::new(amount)))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rules_validation() {
        assert!(Rules::new(Money::new(1000), Money::zero(), 2).is_err());
        assert!(Rules::new(Money::new(-1), Money::new(20), 2).is_err());
        assert!(Rules::new(Money::new(1000), Money::new(20), 0).is_err());
        assert_eq!(
            Rules::new(Money::new(1000), Money::new(20), 2).unwrap(),
            Rules::DEFAULT
        );
    }

    #[test]
    fn test_punches_for_cap_uses_integer_division() {
        assert_eq!(Rules::DEFAULT.punches_for_cap(), 50);

        let odd = Rules::new(Money::new(1000), Money::new(30), 2).unwrap();
        assert_eq!(odd.punches_for_cap(), 33);
    }

    #[test]
    fn test_fresh_record() {
        let record = PunchRecord::new(date(2025, 3, 14));
        assert_eq!(record.month.to_string(), "2025-03");
        assert_eq!(record.today.date.to_string(), "2025-03-14");
        assert_eq!(record.today.count, 0);
        assert_eq!(record.total_valid_punches, 0);
        assert!(record.suspect_times.is_empty());
        assert!(record.history.is_empty());
    }

    #[test]
    fn test_real_money_is_capped() {
        let mut record = PunchRecord::new(date(2025, 3, 14));
        record.total_valid_punches = 60;
        assert_eq!(record.raw_money(&Rules::DEFAULT), Money::new(1200));
        assert_eq!(record.real_money(&Rules::DEFAULT), Money::new(1000));
    }

    #[test]
    fn test_daily_cap_enforcement() {
        let rules = Rules::DEFAULT;
        let mut record = PunchRecord::new(date(2025, 3, 14));

        assert_eq!(
            record.register_strict(&rules),
            PunchOutcome::Recorded(DailyState::Normal)
        );
        assert_eq!(
            record.register_strict(&rules),
            PunchOutcome::Recorded(DailyState::DailyLimitReached)
        );
        let before = record.clone();
        assert_eq!(record.register_strict(&rules), PunchOutcome::Ignored);

        assert_eq!(record, before);
        assert_eq!(record.today.count, 2);
        assert_eq!(record.total_valid_punches, 2);
    }

    #[test]
    fn test_strict_punch_saturates_total() {
        let rules = Rules::DEFAULT;
        let mut record = PunchRecord::new(date(2025, 3, 14));
        record.total_valid_punches = u32::MAX;

        assert_eq!(
            record.register_strict(&rules),
            PunchOutcome::Recorded(DailyState::Normal)
        );
        assert_eq!(record.total_valid_punches, u32::MAX);
        assert_eq!(record.today.count, 1);
        assert_eq!(record.real_money(&rules), rules.cap);
    }

    #[test]
    fn test_suspect_dedup() {
        let mut record = PunchRecord::new(date(2025, 3, 14));

        assert_eq!(record.register_suspect("9:34"), SuspectOutcome::Saved);
        assert_eq!(record.register_suspect("9:34"), SuspectOutcome::Duplicate);
        assert_eq!(record.register_suspect("18:02"), SuspectOutcome::Saved);

        assert_eq!(record.suspect_times, vec!["9:34", "18:02"]);
        assert_eq!(record.total_valid_punches, 0);
    }

    #[test]
    fn test_suspect_ignores_daily_limit() {
        let rules = Rules::DEFAULT;
        let mut record = PunchRecord::new(date(2025, 3, 14));
        record.register_strict(&rules);
        record.register_strict(&rules);

        assert_eq!(record.register_suspect("20:15"), SuspectOutcome::Saved);
    }

    #[test]
    fn test_serialized_layout() {
        let mut record = PunchRecord::new(date(2025, 3, 14));
        record.register_strict(&Rules::DEFAULT);
        record
            .history
            .insert(MonthKey::new(2025, 2).unwrap(), Money::new(1000));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["month"], "2025-03");
        assert_eq!(value["total_valid_punches"], 1);
        assert_eq!(value["today"]["date"], "2025-03-14");
        assert_eq!(value["today"]["count"], 1);
        assert_eq!(value["history"]["2025-02"], 1000);
        assert!(value["suspect_times"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_stored_record_reads_full_file() {
        let json = r#"{
            "month": "2025-03",
            "total_valid_punches": 12,
            "suspect_times": ["9:34"],
            "today": {"date": "2025-03-14", "count": 1},
            "history": {"2025-02": 1000, "2025-01": 640}
        }"#;
        let stored: StoredRecord = serde_json::from_str(json).unwrap();

        assert_eq!(stored.month, Some(MonthKey::new(2025, 3).unwrap()));
        assert_eq!(stored.total_valid_punches, 12);
        assert_eq!(stored.suspect_times, vec!["9:34"]);
        assert_eq!(stored.today.unwrap().count, 1);
        assert_eq!(stored.history.len(), 2);
    }

    #[test]
    fn test_stored_record_defaults_missing_fields() {
        let stored: StoredRecord = serde_json::from_str(r#"{"month": "2025-03"}"#).unwrap();

        assert_eq!(stored.total_valid_punches, 0);
        assert!(stored.suspect_times.is_empty());
        assert!(stored.today.is_none());
        assert!(stored.history.is_empty());
    }

    #[test]
    fn test_stored_record_defaults_malformed_fields() {
        let json = r#"{
            "month": "March",
            "total_valid_punches": "lots",
            "suspect_times": ["9:34", 7, "9:34", "10:01"],
            "today": {"date": "yesterday"},
            "history": {"2025-02": 1000, "bogus": 5, "2025-01": "n/a"}
        }"#;
        let stored: StoredRecord = serde_json::from_str(json).unwrap();

        assert_eq!(stored.month, None);
        assert_eq!(stored.total_valid_punches, 0);
        assert_eq!(stored.suspect_times, vec!["9:34", "10:01"]);
        assert_eq!(stored.today, None);
        assert_eq!(
            stored.history.into_iter().collect::<Vec<_>>(),
            vec![(MonthKey::new(2025, 2).unwrap(), Money::new(1000))]
        );
    }

    #[test]
    fn test_stored_record_rejects_non_object() {
        assert!(serde_json::from_str::<StoredRecord>("42").is_err());
        assert!(serde_json::from_str::<StoredRecord>("\"daka\"").is_err());
    }
}
