//! Status, history and punch message formatting
//!
//! Pure string builders; callers decide where the text goes.

use std::collections::BTreeMap;

use crate::models::{MonthKey, Money, PunchOutcome, PunchRecord, Rules, SuspectOutcome};
use crate::services::Projection;

use super::report::{banner, format_bar, section, Palette, BOLD_GREEN, CYAN, GREEN, RED, YELLOW};

const BAR_WIDTH: usize = 20;

/// Format the full status block for a record and its projection
pub fn format_status(
    record: &PunchRecord,
    projection: &Projection,
    rules: &Rules,
    palette: Palette,
) -> String {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(banner(&format!("Status ({})", projection.month)));

    let ceiling_code = if projection.dynamic_ceiling == rules.cap {
        CYAN
    } else {
        RED
    };
    lines.push(format!("Valid Punches : {}", projection.valid_punches));
    lines.push(format!(
        "Money Secured : {} / {}",
        palette.paint(projection.real_money, BOLD_GREEN),
        palette.paint(projection.dynamic_ceiling, ceiling_code)
    ));

    if let Some(percent) = projection.percent() {
        let bar = format_bar(
            projection.real_money.amount(),
            projection.dynamic_ceiling.amount(),
            BAR_WIDTH,
        );
        lines.push(format!("Progress      : [{}] {}%", bar, percent));
    }

    if !record.suspect_times.is_empty() {
        lines.push(String::new());
        lines.push(section("Suspect Logs"));
        lines.push(palette.paint(record.suspect_times.join(", "), YELLOW));
    }

    if !record.history.is_empty() {
        lines.push(String::new());
        lines.extend(history_lines(&record.history));
    }

    lines.push(String::new());
    lines.push(summary_line(projection, rules, palette));
    lines.push(format!(
        "Remaining punches to hit current ceiling ({}): {}",
        projection.dynamic_ceiling, projection.remaining_punches
    ));
    lines.push(format!(
        "Allowed absences  : {}",
        count_or_capped(projection.allowed_absences)
    ));
    lines.push(format!(
        "Weekend makeups   : {}",
        count_or_capped(projection.weekend_needed)
    ));

    lines.join("\n")
}

fn summary_line(projection: &Projection, rules: &Rules, palette: Palette) -> String {
    if !projection.maxed_out() {
        return format!(
            "Target: Need {} more to hit possible max.",
            projection.deficit
        );
    }

    if projection.cap_reached(rules) {
        palette.paint(format!("[DONE] Cap reached ({}).", rules.cap), GREEN)
    } else {
        palette.paint(
            format!(
                "[DONE] Maxed out at {}. You missed too many.",
                projection.dynamic_ceiling
            ),
            RED,
        )
    }
}

fn count_or_capped(value: Option<u32>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => "cap already reached".to_string(),
    }
}

fn history_lines(history: &BTreeMap<MonthKey, Money>) -> Vec<String> {
    let mut lines = vec![section("Monthly Earnings")];
    lines.extend(
        history
            .iter()
            .rev()
            .map(|(month, earned)| format!("{} : {}", month, earned)),
    );
    lines
}

/// Format the archived history on its own
pub fn format_history(history: &BTreeMap<MonthKey, Money>) -> String {
    if history.is_empty() {
        return "\n[History] No recorded earnings yet.".to_string();
    }

    format!("\n{}", history_lines(history).join("\n"))
}

/// Format the result of a strict punch
pub fn format_punch_outcome(
    outcome: PunchOutcome,
    rules: &Rules,
    currency: &str,
    palette: Palette,
) -> String {
    match outcome {
        PunchOutcome::Recorded(_) => {
            palette.paint(format!("[STRICT] +{} {}.", rules.price, currency), GREEN)
        }
        PunchOutcome::Ignored => palette.paint(
            format!("[Info] Daily limit ({}) reached. Ignored.", rules.max_daily),
            YELLOW,
        ),
    }
}

/// Format the result of recording a suspect time
pub fn format_suspect_outcome(outcome: SuspectOutcome, label: &str, palette: Palette) -> String {
    match outcome {
        SuspectOutcome::Saved => palette.paint(format!("[PROBE] '{}' saved.", label), YELLOW),
        SuspectOutcome::Duplicate => format!("'{}' already exists.", label),
    }
}
