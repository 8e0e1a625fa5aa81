//! Hand and result formatters for terminal display.
//!
//! Pure functions; nothing here writes to a stream.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::Hand;
//! use blackjack_cli::formatters::format_player;
//!
//! let hand = Hand::from_cards(vec![
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Hearts),
//! ]);
//! assert_eq!(format_player(&hand), "A♠  9♥  (20)");
//! ```

use blackjack_engine::game::{DealerView, ResultKind, RoundOutcome};
use blackjack_engine::hand::Hand;

/// Cards followed by the total in parentheses; empty for an empty hand.
pub fn format_player(hand: &Hand) -> String {
    if hand.is_empty() {
        return String::new();
    }
    format!("{}  ({})", hand, hand.value())
}

/// Visible dealer cards; the total is shown only once nothing is face down.
pub fn format_dealer(view: &DealerView) -> String {
    match view.total {
        Some(total) => format!("{}  ({})", view, total),
        None => view.to_string(),
    }
}

/// One-line verdict for a settled round.
pub fn format_result(outcome: &RoundOutcome) -> String {
    let verdict = match (outcome.result, outcome.natural) {
        (ResultKind::Win, true) => "BLACKJACK",
        (ResultKind::Win, false) => "WIN",
        (ResultKind::Lose, _) => "LOSE",
        (ResultKind::Push, _) => "PUSH",
        (ResultKind::InProgress, _) => "IN PROGRESS",
    };
    match outcome.dealer_total {
        Some(dv) => format!(
            "Result: {} (player {} vs dealer {})",
            verdict, outcome.player_total, dv
        ),
        None => format!("Result: {} (player {})", verdict, outcome.player_total),
    }
}

/// Signed amount, e.g. `+15`, `-10`, `+0`.
pub fn format_delta(delta: i64) -> String {
    format!("{:+}", delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: ResultKind, natural: bool) -> RoundOutcome {
        RoundOutcome {
            result,
            player_total: 21,
            dealer_total: Some(10),
            bankroll_delta: 15,
            bankroll_reset: false,
            natural,
            log: Vec::new(),
        }
    }

    #[test]
    fn natural_win_is_labelled_blackjack() {
        assert_eq!(
            format_result(&outcome(ResultKind::Win, true)),
            "Result: BLACKJACK (player 21 vs dealer 10)"
        );
        assert!(format_result(&outcome(ResultKind::Win, false)).contains("WIN"));
    }

    #[test]
    fn delta_is_signed() {
        assert_eq!(format_delta(15), "+15");
        assert_eq!(format_delta(-10), "-10");
        assert_eq!(format_delta(0), "+0");
    }

    #[test]
    fn empty_player_hand_renders_empty() {
        assert_eq!(format_player(&Hand::new()), "");
    }
}
