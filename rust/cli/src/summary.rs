//! Per-session tallies shared by `play` and `sim`.

use blackjack_engine::game::{ResultKind, RoundOutcome};
use std::io::Write;

use crate::formatters::format_delta;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub blackjacks: u32,
    pub resets: u32,
    /// Sum of per-round bankroll changes, resets excluded
    pub net: i64,
}

impl SessionSummary {
    /// Count a settled round. `round_delta` covers the whole round, stake
    /// included.
    pub fn record(&mut self, closing: &RoundOutcome, round_delta: i64) {
        self.rounds += 1;
        match closing.result {
            ResultKind::Win => self.wins += 1,
            ResultKind::Lose => self.losses += 1,
            ResultKind::Push => self.pushes += 1,
            ResultKind::InProgress => {}
        }
        if closing.natural && closing.result == ResultKind::Win {
            self.blackjacks += 1;
        }
        if closing.bankroll_reset {
            self.resets += 1;
        }
        self.net += round_delta;
    }

    pub fn write(&self, out: &mut dyn Write, final_bankroll: u32) -> std::io::Result<()> {
        writeln!(out, "Rounds played: {}", self.rounds)?;
        writeln!(
            out,
            "Wins: {}  Losses: {}  Pushes: {}  Blackjacks: {}",
            self.wins, self.losses, self.pushes, self.blackjacks
        )?;
        if self.resets > 0 {
            writeln!(out, "Bankroll resets: {}", self.resets)?;
        }
        writeln!(out, "Net: {}", format_delta(self.net))?;
        writeln!(out, "Final bankroll: {}", final_bankroll)
    }
}
