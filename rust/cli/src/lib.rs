//! # Blackjack CLI Library
//!
//! Terminal front end for the blackjack round engine. It reads bets and
//! actions, drives [`blackjack_engine::engine::Engine`], and renders hands,
//! narration and results.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the appropriate
//! subcommand; [`run_with_input`] does the same with an explicit input
//! stream.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["blackjack", "sim", "--rounds", "100", "--seed", "7"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactively (bet, hit, stand)
//! - `sim`: Auto-play rounds and print a summary
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod summary;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_play_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Interactive input for `play` is read from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["blackjack", "sim", "--rounds", "5", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Use stdin for real input (supports both TTY and piped stdin)
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], reading interactive input from `stdin`.
///
/// Flags override configuration (`BLACKJACK_CONFIG` file and
/// `BLACKJACK_*` environment variables), which override defaults.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    logging::init_logging();

    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Exit code is ERROR whether or not the usage text got out
                    let _ = write_usage(err, &e);
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, out, err, stdin) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Resolve configuration and run one subcommand. Flags win over
/// configuration; `cfg` reports configuration without flags.
fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            bet,
            seed,
            rounds,
            history,
        } => {
            let cfg = config::load_with_sources()?.config;
            handle_play_command(
                bet.unwrap_or(cfg.default_bet),
                seed.or(cfg.seed),
                rounds,
                history,
                out,
                err,
                stdin,
            )
        }
        Commands::Sim {
            rounds,
            bet,
            seed,
            stand_on,
            output,
        } => {
            let cfg = config::load_with_sources()?.config;
            handle_sim_command(
                rounds,
                bet.unwrap_or(cfg.default_bet),
                seed.or(cfg.seed),
                stand_on.unwrap_or(cfg.stand_on),
                output,
                out,
                err,
            )
        }
    }
}

fn write_usage(err: &mut dyn Write, parse_error: &clap::Error) -> std::io::Result<()> {
    writeln!(err, "{}", parse_error)?;
    writeln!(err, "Usage: blackjack <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: blackjack --help")
}
