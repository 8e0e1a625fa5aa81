use thiserror::Error;

/// Rejections raised by the round engine.
///
/// Every variant is recoverable: a call that returns one of these leaves the
/// bankroll, both hands and the round state exactly as they were.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet: bets must be a positive whole number")]
    InvalidBet,
    #[error("Insufficient bankroll: bet {bet} exceeds bankroll {bankroll}")]
    InsufficientBankroll { bet: u32, bankroll: u32 },
    #[error("Round already in progress")]
    RoundInProgress,
    #[error("No round in progress")]
    NotInProgress,
}
