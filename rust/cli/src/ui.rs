//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands: error and warning lines, and the table view of the
//! current round.

use blackjack_engine::engine::Engine;
use blackjack_engine::game::RoundOutcome;
use std::io::Write;

use crate::formatters::{format_dealer, format_player};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Show both hands and the bankroll. The dealer's hole card stays hidden
/// while the player is to act.
pub fn render_table(out: &mut dyn Write, engine: &Engine) -> std::io::Result<()> {
    writeln!(out, "Dealer: {}", format_dealer(&engine.dealer_view()))?;
    writeln!(out, "Player: {}", format_player(engine.player_hand()))?;
    writeln!(out, "Bankroll: {}", engine.bankroll())
}

/// Print the narration lines carried by an outcome.
pub fn write_log(out: &mut dyn Write, outcome: &RoundOutcome) -> std::io::Result<()> {
    for line in &outcome.log {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
