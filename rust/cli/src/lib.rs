//! # pokerarena CLI Library
//!
//! Command-line driver for pokerarena tournaments. Every subcommand seats
//! built-in strategies from `pokerarena-ai` at a `pokerarena-engine` table.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, resolves configuration and dispatches to the
//! subcommand. Output goes to the supplied writers so tests can capture it.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["pokerarena", "deal", "--seed", "42", "--seats", "shove,passive"];
//! let code = pokerarena_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Board: "));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Run one tournament, printing the table and engine notes
//! - `sim`: Run many tournaments and tally champions
//! - `deal`: Deal and score a single hand
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, PokerArenaCli, TableArgs};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. `--help` and `--version` print to `out` and
/// succeed; any other parse failure prints the clap error and a command
/// list to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match PokerArenaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            table,
            interval_ms,
            quiet,
        } => resolve(&table).and_then(|mut config| {
            if let Some(ms) = interval_ms {
                config.move_interval_ms = ms;
            }
            handle_play_command(&config, quiet, out)
        }),
        Commands::Sim {
            tournaments,
            output,
            table,
        } => resolve(&table).and_then(|config| handle_sim_command(tournaments, output, &config, out)),
        Commands::Deal { table } => resolve(&table).and_then(|config| handle_deal_command(&config, out)),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            // nothing more to report if stderr itself is gone
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn resolve(table: &TableArgs) -> Result<config::Config, CliError> {
    Ok(config::resolve(table)?.config)
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "pokerarena tournament CLI").is_err()
                || writeln!(err, "Usage: pokerarena <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            if writeln!(err, "\nFor full help, run: pokerarena --help").is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_capture(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_capture(&["pokerarena", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("play"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, out, err) = run_capture(&["pokerarena", "bench"]);
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.contains("Commands:"));
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn command_list_matches_subcommands() {
        for c in COMMANDS {
            let parsed = PokerArenaCli::try_parse_from(["pokerarena", *c]).unwrap();
            assert_eq!(parsed.cmd.name(), *c);
        }
    }
}
