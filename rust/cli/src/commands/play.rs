//! # Play Command
//!
//! Interactive blackjack against the house dealer.
//!
//! Each round starts at the bet prompt (empty line repeats the last bet),
//! then loops on `hit`/`stand` while the engine reports the player is to
//! act. Hit and stand are only offered in that state. Engine rejections are
//! shown as `Error: ...` and the prompt repeats; nothing is lost.
//!
//! `q`/`quit` or end of input ends the session. Quitting mid-round abandons
//! the round and its stake.

use crate::error::CliError;
use crate::formatters::{format_delta, format_result};
use crate::io_utils::prompt_line;
use crate::summary::SessionSummary;
use crate::ui;
use crate::validation::{BetInput, TurnCommand, parse_bet_input, parse_turn_command};
use blackjack_engine::engine::Engine;
use blackjack_engine::game::RoundOutcome;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use std::io::{BufRead, Write};

/// Handle the play command: interactive blackjack session
///
/// # Arguments
///
/// * `bet` - Bet offered at the first prompt
/// * `seed` - Shoe seed for reproducibility (default: random)
/// * `rounds` - Stop after this many settled rounds (default: until quit)
/// * `history` - Optional JSONL file receiving one record per settled round
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for bets and actions
///
/// # Returns
///
/// * `Ok(())` when the session ends normally (quit, EOF or round limit)
/// * `Err(CliError)` if `rounds` is 0 or an I/O error occurs
pub fn handle_play_command(
    bet: u32,
    seed: Option<u64>,
    rounds: Option<u32>,
    history: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut logger = history.map(RoundLogger::create).transpose()?;

    let mut eng = Engine::new(Some(seed));
    writeln!(out, "play: seed={} bankroll={}", seed, eng.bankroll())?;

    let summary = play_session(&mut eng, bet, rounds, logger.as_mut(), out, err, stdin)?;

    summary.write(out, eng.bankroll())?;
    Ok(())
}

/// Run rounds until the limit, a quit, or EOF (module-private helper)
fn play_session(
    eng: &mut Engine,
    first_bet: u32,
    rounds: Option<u32>,
    mut logger: Option<&mut RoundLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<SessionSummary, CliError> {
    let mut summary = SessionSummary::default();
    let mut last_bet = first_bet;

    loop {
        if rounds.is_some_and(|limit| summary.rounds >= limit) {
            break;
        }

        let prompt = format!("Bet [{}] (q to quit): ", last_bet);
        let Some(line) = prompt_line(out, stdin, &prompt)? else {
            break;
        };
        let bet = match parse_bet_input(&line, last_bet) {
            BetInput::Bet(b) => b,
            BetInput::Quit => break,
            BetInput::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let opening = match eng.start_round(bet) {
            Ok(o) => o,
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
                continue;
            }
        };
        last_bet = bet;
        ui::write_log(out, &opening)?;

        let Some((closing, round_delta)) = play_turn(eng, opening, out, err, stdin)? else {
            writeln!(out, "Round abandoned; stake forfeited.")?;
            break;
        };

        ui::render_table(out, eng)?;
        writeln!(out, "{}", format_result(&closing))?;
        writeln!(out, "Round net: {}", format_delta(round_delta))?;
        summary.record(&closing, round_delta);

        if let Some(logger) = logger.as_deref_mut() {
            let id = logger.next_id();
            logger.write(&RoundRecord::from_engine(id, eng, &closing, round_delta))?;
        }
    }

    Ok(summary)
}

/// Prompt for actions while the player is to act. Returns the settling
/// outcome with the round's total bankroll change, or `None` if the player
/// quit before the round was settled.
fn play_turn(
    eng: &mut Engine,
    opening: RoundOutcome,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<(RoundOutcome, i64)>, CliError> {
    let mut round_delta = opening.bankroll_delta;
    let mut latest = opening;

    while eng.state().accepts_actions() {
        ui::render_table(out, eng)?;
        let Some(line) = prompt_line(out, stdin, "Action (hit/stand/q): ")? else {
            return Ok(None);
        };
        let result = match parse_turn_command(&line) {
            TurnCommand::Hit => eng.hit(),
            TurnCommand::Stand => eng.stand(),
            TurnCommand::Quit => return Ok(None),
            TurnCommand::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };
        match result {
            Ok(outcome) => {
                ui::write_log(out, &outcome)?;
                round_delta += outcome.bankroll_delta;
                latest = outcome;
            }
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
    }

    Ok(Some((latest, round_delta)))
}
