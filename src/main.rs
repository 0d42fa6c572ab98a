mod cli;
mod settings;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{debug, error, info};
use neo::{LineStore, Outcome, StartupError, Theme};

use cli::{parse_cli, write_outcome};
use settings::ResolvedConfig;

/// Exit status when the user cancels, matching a shell's SIGINT convention.
const EXIT_CANCELLED: u8 = 130;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_CANCELLED),
        Err(err) => {
            error!("{err:#}");
            eprintln!("neo: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Returns whether a line was picked.
fn run() -> Result<bool> {
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    if let Some(path) = neo::logging::initialize(resolved.log_file.as_deref())? {
        info!("logging to {}", path.display());
    }
    debug!("resolved configuration: {resolved:?}");

    pick(resolved)
}

/// Load the candidate lines, run the picker and print the choice.
fn pick(settings: ResolvedConfig) -> Result<bool> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(StartupError::InputIsTerminal.into());
    }
    let lines = LineStore::from_reader(stdin.lock(), settings.limits)?;
    info!("loaded {} line(s)", lines.len());

    let outcome = neo::run(&lines, settings.session, Theme::for_color(settings.color))?;
    info!("session finished: {outcome:?}");

    write_outcome(&mut io::stdout().lock(), &outcome).context("failed to write selection")?;
    Ok(matches!(outcome, Outcome::Confirmed(_)))
}
