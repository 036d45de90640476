//! Punch, status and history commands

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{
    format_history, format_punch_outcome, format_status, format_suspect_outcome, Palette,
};
use crate::error::DakaResult;
use crate::models::{PunchOutcome, PunchRecord};
use crate::services::{Projection, PunchService};
use crate::storage::StateStore;

fn palette(settings: &Settings) -> Palette {
    Palette::new(settings.use_color())
}

fn print_status(store: &StateStore, settings: &Settings, record: &PunchRecord, today: NaiveDate) {
    let projection = Projection::compute(record, today, store.rules());
    println!(
        "{}",
        format_status(record, &projection, store.rules(), palette(settings))
    );
}

/// Strict punch; the status is only shown when the punch counted
pub fn handle_punch(store: &StateStore, settings: &Settings, today: NaiveDate) -> DakaResult<()> {
    let (outcome, record) = PunchService::new(store).strict_punch(today)?;

    println!(
        "{}",
        format_punch_outcome(
            outcome,
            store.rules(),
            &settings.currency,
            palette(settings)
        )
    );

    if outcome != PunchOutcome::Ignored {
        print_status(store, settings, &record, today);
    }
    Ok(())
}

/// Record a suspect time, then show the status
pub fn handle_suspect(
    store: &StateStore,
    settings: &Settings,
    today: NaiveDate,
    label: &str,
) -> DakaResult<()> {
    let (outcome, record) = PunchService::new(store).suspect_punch(label, today)?;

    println!(
        "{}",
        format_suspect_outcome(outcome, label.trim(), palette(settings))
    );
    print_status(store, settings, &record, today);
    Ok(())
}

/// Show the status without changing anything
pub fn handle_status(store: &StateStore, settings: &Settings, today: NaiveDate) -> DakaResult<()> {
    let record = store.load(today)?;
    print_status(store, settings, &record, today);
    Ok(())
}

/// Show the archived monthly earnings
pub fn handle_history(store: &StateStore, today: NaiveDate) -> DakaResult<()> {
    let record = store.load(today)?;
    println!("{}", format_history(&record.history));
    Ok(())
}
