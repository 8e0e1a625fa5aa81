use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Engine;
use crate::game::{ResultKind, RoundOutcome};

/// Complete record of one settled round.
/// Serialized to JSONL format for round history storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Shoe seed for the session (enables deterministic replay)
    pub seed: Option<u64>,
    pub bet: u32,
    /// Player's final cards in deal order
    pub player: Vec<Card>,
    /// Dealer's final cards in deal order
    pub dealer: Vec<Card>,
    pub player_total: u32,
    pub dealer_total: u32,
    pub result: ResultKind,
    /// Settled on the opening deal
    #[serde(default)]
    pub natural: bool,
    /// Net change over the whole round, stake included
    pub bankroll_delta: i64,
    /// Bankroll after settlement (and after any exhaustion reset)
    pub bankroll_after: u32,
    /// Timestamp when the round was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Snapshot a just-settled round from the engine.
    ///
    /// `round_delta` is the sum of `bankroll_delta` over every outcome of the
    /// round, since the stake is deducted by one call and paid by another.
    pub fn from_engine(
        round_id: String,
        engine: &Engine,
        outcome: &RoundOutcome,
        round_delta: i64,
    ) -> Self {
        Self {
            round_id,
            seed: Some(engine.seed()),
            bet: engine.current_bet(),
            player: engine.player_hand().cards().to_vec(),
            dealer: engine.dealer_hand().cards().to_vec(),
            player_total: outcome.player_total,
            dealer_total: engine.dealer_hand().value(),
            result: outcome.result,
            natural: outcome.natural,
            bankroll_delta: round_delta,
            bankroll_after: engine.bankroll(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file, one object per line.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn sink(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
