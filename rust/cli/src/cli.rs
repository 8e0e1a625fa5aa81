//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Single-player blackjack against a dealer that draws to 17"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively at the terminal
    Play {
        /// Bet offered at the first prompt (default: config default_bet)
        #[arg(long)]
        bet: Option<u32>,
        /// Shoe seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many settled rounds
        #[arg(long)]
        rounds: Option<u32>,
        /// Append settled rounds to this JSONL file
        #[arg(long)]
        history: Option<String>,
    },
    /// Auto-play rounds with a fixed hit/stand threshold
    Sim {
        #[arg(long)]
        rounds: u32,
        /// Flat bet per round (default: config default_bet)
        #[arg(long)]
        bet: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Stand at or above this total (default: config stand_on)
        #[arg(long = "stand-on")]
        stand_on: Option<u32>,
        /// Write round history (JSONL) to this path
        #[arg(long)]
        output: Option<String>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
