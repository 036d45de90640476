//! CLI command handlers
//!
//! Maps the positional arguments of `dk` onto an `Action` and runs it
//! against the state store.

pub mod commands;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::DakaResult;
use crate::storage::StateStore;

pub use commands::{handle_history, handle_punch, handle_status, handle_suspect};

pub const USAGE: &str = "Usage: dk | dk 9:34 | dk s | dk h";

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No arguments: strict punch, then status
    Punch,
    /// `s`: status only
    Status,
    /// `h`: archived history only
    History,
    /// Any other single argument: record a suspect time, then status
    Suspect(String),
    /// Too many arguments
    Usage,
}

impl Action {
    pub fn from_args(args: &[String]) -> Self {
        match args {
            [] => Action::Punch,
            [arg] => match arg.as_str() {
                "s" => Action::Status,
                "h" => Action::History,
                label => Action::Suspect(label.to_string()),
            },
            _ => Action::Usage,
        }
    }
}

/// Run `action` for `today`
pub fn handle_action(
    store: &StateStore,
    settings: &Settings,
    today: NaiveDate,
    action: Action,
) -> DakaResult<()> {
    match action {
        Action::Punch => handle_punch(store, settings, today),
        Action::Status => handle_status(store, settings, today),
        Action::History => handle_history(store, today),
        Action::Suspect(label) => handle_suspect(store, settings, today, &label),
        Action::Usage => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
