//! Monthly earnings projection
//!
//! Turns a partial month of punches into the money secured so far, the
//! ceiling still reachable, and how many punches, absences or weekend makeups
//! are left to play with. Everything here is a pure function of the record,
//! the date and the rules.

use chrono::NaiveDate;

use crate::models::{MonthKey, Money, PunchRecord, Rules};

use super::calendar;

/// Projection of a month's earnings as of a given day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub month: MonthKey,
    pub valid_punches: u32,
    /// Uncapped money for the punches so far
    pub raw_money: Money,
    /// Payable money so far (capped)
    pub real_money: Money,
    /// Punches still allowed today
    pub today_left: u32,
    /// Days left in the month after today
    pub days_remaining: u32,
    /// Money still earnable if every remaining slot is punched
    pub future_potential: Money,
    /// Best reachable payable total for the month
    pub dynamic_ceiling: Money,
    /// `dynamic_ceiling - real_money`
    pub deficit: Money,
    /// Punches needed to reach the dynamic ceiling
    pub remaining_punches: u32,
    /// Punches that may still be skipped while reaching the cap;
    /// `None` once the cap is already secured
    pub allowed_absences: Option<u32>,
    /// Punches that must fall on weekends even with every workday fully
    /// punched; `None` once the cap is already secured
    pub weekend_needed: Option<u32>,
}

impl Projection {
    /// Compute the projection for `record` as of `today`
    pub fn compute(record: &PunchRecord, today: NaiveDate, rules: &Rules) -> Self {
        let punches = i64::from(record.total_valid_punches);
        let max_daily = i64::from(rules.max_daily);

        let raw_money = record.raw_money(rules);
        let real_money = record.real_money(rules);
        let today_left = rules.max_daily.saturating_sub(record.today.count);
        let days_remaining = calendar::days_remaining(today);

        let future_potential =
            rules.price.times(today_left) + rules.price.times(days_remaining * rules.max_daily);
        let dynamic_ceiling = (raw_money + future_potential).min(rules.cap);
        let deficit = dynamic_ceiling - real_money;
        let remaining_punches = to_count(deficit.units_ceil(rules.price));

        let needed_for_cap = i64::from(rules.punches_for_cap());
        let (allowed_absences, weekend_needed) = if punches >= needed_for_cap {
            (None, None)
        } else {
            let remaining_needed = needed_for_cap - punches;

            let max_future = i64::from(today_left) + i64::from(days_remaining) * max_daily;
            let workday_punches = i64::from(today_left)
                + i64::from(calendar::remaining_workdays(today)) * max_daily;

            (
                Some(to_count(max_future - remaining_needed)),
                Some(to_count(remaining_needed - workday_punches)),
            )
        };

        Self {
            month: record.month,
            valid_punches: record.total_valid_punches,
            raw_money,
            real_money,
            today_left,
            days_remaining,
            future_potential,
            dynamic_ceiling,
            deficit,
            remaining_punches,
            allowed_absences,
            weekend_needed,
        }
    }

    /// The cap is already secured
    pub fn cap_reached(&self, rules: &Rules) -> bool {
        self.real_money >= rules.cap
    }

    /// Nothing more can be earned this month
    pub fn maxed_out(&self) -> bool {
        !self.deficit.is_positive()
    }

    /// Whole-number progress toward the dynamic ceiling, 0..=100
    pub fn percent(&self) -> Option<u32> {
        if !self.dynamic_ceiling.is_positive() {
            return None;
        }
        let pct = self.real_money.amount() * 100 / self.dynamic_ceiling.amount();
        Some(pct.clamp(0, 100) as u32)
    }
}

/// Clamp a signed intermediate to a non-negative count
fn to_count(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
