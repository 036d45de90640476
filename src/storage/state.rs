//! Punch state persistence and monthly rotation
//!
//! `reconcile` decides, without touching the disk, whether a stored record
//! still belongs to the current month and day. `StateStore::load` applies
//! that decision and writes a rotated record back immediately.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::DakaResult;
use crate::models::{DayKey, MonthKey, Money, PunchRecord, Rules, StoredRecord, TodayTally};

use super::file_io::{read_json, write_json_atomic};

/// Outcome of reconciling a stored record with the current date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// The record valid for today
    pub record: PunchRecord,
    /// History entry written by this rotation, if any
    pub archived: Option<(MonthKey, Money)>,
    /// The stored record was replaced by a fresh month
    pub rotated: bool,
    /// Only the day tally was reset
    pub reset_today: bool,
}

/// Bring a stored record up to date for `today`
///
/// A record from another month (or with no readable month) is archived into
/// history at its capped value and replaced by a fresh record; history
/// entries that already exist are never overwritten. A record from this
/// month but an earlier day only gets its day tally reset.
pub fn reconcile(stored: StoredRecord, today: NaiveDate, rules: &Rules) -> Reconciliation {
    let current_month = MonthKey::from_date(today);
    let current_day = DayKey::new(today);

    let StoredRecord {
        month,
        total_valid_punches,
        suspect_times,
        today: tally,
        mut history,
    } = stored;

    if month != Some(current_month) {
        let archived = match month {
            Some(prev) if !history.contains_key(&prev) => {
                let earned = rules.payable(total_valid_punches);
                history.insert(prev, earned);
                Some((prev, earned))
            }
            _ => None,
        };

        return Reconciliation {
            record: PunchRecord::with_history(today, history),
            archived,
            rotated: true,
            reset_today: false,
        };
    }

    let kept_count = tally
        .filter(|t| t.date == current_day)
        .map(|t| t.count.min(rules.max_daily));

    let record = PunchRecord {
        month: current_month,
        total_valid_punches,
        suspect_times,
        today: TodayTally {
            date: current_day,
            count: kept_count.unwrap_or(0),
        },
        history,
    };

    Reconciliation {
        record,
        archived: None,
        rotated: false,
        reset_today: kept_count.is_none(),
    }
}

/// Loads and saves the punch record at a fixed path
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
    rules: Rules,
}

impl StateStore {
    pub fn new(path: PathBuf, rules: Rules) -> Self {
        Self { path, rules }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Produce a valid record for `today`
    ///
    /// A missing or unreadable state file yields a fresh record and is not an
    /// error. A monthly rotation is persisted before returning; failing that
    /// write is.
    pub fn load(&self, today: NaiveDate) -> DakaResult<PunchRecord> {
        let stored = match read_json::<StoredRecord, _>(&self.path) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!(path = %self.path.display(), "no state file yet, starting fresh");
                return Ok(PunchRecord::new(today));
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file unreadable, starting fresh");
                return Ok(PunchRecord::new(today));
            }
        };

        let reconciliation = reconcile(stored, today, &self.rules);

        if reconciliation.rotated {
            match reconciliation.archived {
                Some((month, earned)) => info!(%month, %earned, "archived month"),
                None => info!("rotated state without archiving"),
            }
            self.save(&reconciliation.record)?;
        } else if reconciliation.reset_today {
            debug!(date = %reconciliation.record.today.date, "new day, tally reset");
        }

        Ok(reconciliation.record)
    }

    /// Overwrite the persisted state with `record`
    pub fn save(&self, record: &PunchRecord) -> DakaResult<()> {
        write_json_atomic(&self.path, record)?;
        debug!(
            path = %self.path.display(),
            punches = record.total_valid_punches,
            today = record.today.count,
            "state saved"
        );
        Ok(())
    }
}
