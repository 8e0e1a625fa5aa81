//! Simulation command handler for non-interactive auto-play.
//!
//! Plays a fixed number of rounds with a flat bet and a threshold policy:
//! hit while the player total is below `stand_on`, otherwise stand. The
//! bet is capped at the current bankroll so a short bankroll never stalls
//! the run. Seeded runs are fully reproducible.
//!
//! # Examples
//!
//! ```no_run
//! use blackjack_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//!
//! // 1000 rounds, bet 10, stand on 17, seed 42, write history
//! handle_sim_command(1000, 10, Some(42), 17, Some("data/rounds.jsonl".to_string()), &mut out, &mut err).unwrap();
//! ```

use crate::error::CliError;
use crate::summary::SessionSummary;
use crate::ui;
use blackjack_engine::engine::Engine;
use blackjack_engine::game::RoundState;
use blackjack_engine::hand::BLACKJACK;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use std::io::Write;
use tracing::debug;

/// Handle the sim command: auto-play `rounds` rounds.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `bet` - Flat stake per round (must be >= 1)
/// * `seed` - Shoe seed (default: random)
/// * `stand_on` - Player stands at or above this total (2..=21)
/// * `output` - Optional JSONL round history path
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on invalid arguments or I/O failure
pub fn handle_sim_command(
    rounds: u32,
    bet: u32,
    seed: Option<u64>,
    stand_on: u32,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if bet == 0 {
        ui::write_error(err, "bet must be >= 1")?;
        return Err(CliError::InvalidInput("bet must be >= 1".to_string()));
    }
    if !(2..=BLACKJACK).contains(&stand_on) {
        ui::write_error(err, "stand-on must be between 2 and 21")?;
        return Err(CliError::InvalidInput(
            "stand-on must be between 2 and 21".to_string(),
        ));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut logger = output.map(RoundLogger::create).transpose()?;
    let mut eng = Engine::new(Some(seed));

    writeln!(
        out,
        "sim: rounds={} bet={} stand_on={} seed={}",
        rounds, bet, stand_on, seed
    )?;

    let mut summary = SessionSummary::default();
    let mut capped = false;
    for _ in 0..rounds {
        let stake = bet.min(eng.bankroll());
        if stake < bet && !capped {
            ui::display_warning(
                err,
                &format!("bankroll {} below bet {}; betting the bankroll", stake, bet),
            )?;
            capped = true;
        }

        let opening = eng.start_round(stake)?;
        let mut round_delta = opening.bankroll_delta;
        let mut closing = opening;
        while eng.state() == RoundState::PlayerTurn {
            closing = if eng.player_hand().value() < stand_on {
                eng.hit()?
            } else {
                eng.stand()?
            };
            round_delta += closing.bankroll_delta;
        }
        debug!(round = summary.rounds + 1, result = %closing.result, round_delta, "sim round");
        summary.record(&closing, round_delta);

        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            logger.write(&RoundRecord::from_engine(id, &eng, &closing, round_delta))?;
        }
    }

    summary.write(out, eng.bankroll())?;
    if eng.shoe_reshuffles() > 0 {
        writeln!(out, "Shoe reshuffles: {}", eng.shoe_reshuffles())?;
    }
    Ok(())
}
