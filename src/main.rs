use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use daka::cli::{handle_action, Action};
use daka::config::{DakaPaths, Settings};
use daka::models::{DayKey, Rules};
use daka::storage::StateStore;
use daka::DakaError;

/// Exit status when a punch may not have been persisted
const EXIT_PERSISTENCE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "dk",
    version,
    about = "Attendance punch tracker with a monthly earnings projection",
    long_about = "Run without arguments to register a punch. `dk s` shows the \
                  status, `dk h` the archived monthly earnings, and any other \
                  single argument is saved as a suspect time (e.g. `dk 9:34`)."
)]
struct Cli {
    /// Nothing (punch), `s` (status), `h` (history) or a suspect time
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,

    /// Directory holding daka_status.json and config.json (overrides DAKA_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, hide = true)]
    today: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DAKA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => {
            let day = s
                .parse::<DayKey>()
                .with_context(|| format!("Invalid --today value '{}'", s))?;
            Ok(day.date())
        }
        None => Ok(Local::now().date_naive()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = match cli.data_dir {
        Some(dir) => DakaPaths::with_base_dir(dir),
        None => DakaPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let today = resolve_today(cli.today.as_deref())?;

    let store = StateStore::new(paths.state_file(), Rules::DEFAULT);
    handle_action(&store, &settings, today, Action::from_args(&cli.args))?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let persistence = err
                .downcast_ref::<DakaError>()
                .is_some_and(DakaError::is_persistence);
            if persistence {
                ExitCode::from(EXIT_PERSISTENCE)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
