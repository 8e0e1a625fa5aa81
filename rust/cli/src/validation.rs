//! Input parsing and validation for the interactive `play` command.
//!
//! Bet text is checked here before the engine sees it: anything that is not
//! a positive whole number is rejected with the engine's own
//! [`GameError::InvalidBet`] message. Whether the bet fits the bankroll is
//! left to the engine.

use blackjack_engine::errors::GameError;

/// Outcome of reading the bet prompt.
#[derive(Debug, PartialEq)]
pub enum BetInput {
    /// Positive stake ready for `start_round`
    Bet(u32),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Action entered while the player is to act.
#[derive(Debug, PartialEq)]
pub enum TurnCommand {
    Hit,
    Stand,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    input == "q" || input == "quit"
}

/// Parse bet text as a positive integer.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::parse_bet;
/// use blackjack_engine::errors::GameError;
///
/// assert_eq!(parse_bet("25"), Ok(25));
/// assert_eq!(parse_bet(" 7 "), Ok(7));
/// assert_eq!(parse_bet("0"), Err(GameError::InvalidBet));
/// assert_eq!(parse_bet("-5"), Err(GameError::InvalidBet));
/// assert_eq!(parse_bet("ten"), Err(GameError::InvalidBet));
/// ```
pub fn parse_bet(input: &str) -> Result<u32, GameError> {
    match input.trim().parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(GameError::InvalidBet),
    }
}

/// Parse a line typed at the bet prompt. An empty line repeats `last_bet`.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_bet_input, BetInput};
///
/// assert_eq!(parse_bet_input("", 10), BetInput::Bet(10));
/// assert_eq!(parse_bet_input("50", 10), BetInput::Bet(50));
/// assert_eq!(parse_bet_input("Q", 10), BetInput::Quit);
/// assert!(matches!(parse_bet_input("abc", 10), BetInput::Invalid(_)));
/// ```
pub fn parse_bet_input(input: &str, last_bet: u32) -> BetInput {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return BetInput::Bet(last_bet);
    }
    if is_quit(&input) {
        return BetInput::Quit;
    }
    match parse_bet(&input) {
        Ok(amount) => BetInput::Bet(amount),
        Err(e) => BetInput::Invalid(e.to_string()),
    }
}

/// Parse a line typed while the player is to act.
///
/// Accepts (case-insensitive) `h`/`hit`, `s`/`stand`, `q`/`quit`.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_turn_command, TurnCommand};
///
/// assert_eq!(parse_turn_command("hit"), TurnCommand::Hit);
/// assert_eq!(parse_turn_command("S"), TurnCommand::Stand);
/// assert_eq!(parse_turn_command("q"), TurnCommand::Quit);
/// match parse_turn_command("double") {
///     TurnCommand::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_turn_command(input: &str) -> TurnCommand {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return TurnCommand::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return TurnCommand::Quit;
    }
    match input.as_str() {
        "h" | "hit" => TurnCommand::Hit,
        "s" | "stand" => TurnCommand::Stand,
        other => TurnCommand::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: hit, stand, q",
            other
        )),
    }
}
