//! Punch registration service
//!
//! Loads the record for today, applies one mutation and persists it.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{DakaError, DakaResult};
use crate::models::{PunchOutcome, PunchRecord, SuspectOutcome};
use crate::storage::StateStore;

/// Service for registering punches
pub struct PunchService<'a> {
    store: &'a StateStore,
}

impl<'a> PunchService<'a> {
    /// Create a new punch service
    pub fn new(store: &'a StateStore) -> Self {
        Self { store }
    }

    /// Register a strict punch for `today`
    ///
    /// An ignored punch leaves the state file untouched.
    pub fn strict_punch(&self, today: NaiveDate) -> DakaResult<(PunchOutcome, PunchRecord)> {
        let mut record = self.store.load(today)?;
        let outcome = record.register_strict(self.store.rules());

        match outcome {
            PunchOutcome::Recorded(state) => {
                self.store.save(&record)?;
                debug!(?state, punches = record.total_valid_punches, "strict punch recorded");
            }
            PunchOutcome::Ignored => {
                debug!(count = record.today.count, "daily limit reached, punch ignored");
            }
        }

        Ok((outcome, record))
    }

    /// Record a suspect time label for later review
    ///
    /// The label is trimmed and must not be empty.
    pub fn suspect_punch(
        &self,
        label: &str,
        today: NaiveDate,
    ) -> DakaResult<(SuspectOutcome, PunchRecord)> {
        let label = label.trim();
        if label.is_empty() {
            return Err(DakaError::Validation(
                "Suspect time label cannot be empty".into(),
            ));
        }

        let mut record = self.store.load(today)?;
        let outcome = record.register_suspect(label);

        if outcome == SuspectOutcome::Saved {
            self.store.save(&record)?;
            debug!(label, "suspect time saved");
        }

        Ok((outcome, record))
    }
}
