use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::hand::Hand;

/// Where the current round stands.
///
/// `Idle` only occurs before the first round; after that the engine
/// alternates between `PlayerTurn` and `Settled`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    /// No bet active; hit and stand are disabled
    Idle,
    /// The player may hit or stand
    PlayerTurn,
    /// Round finished; a new round must be started
    Settled,
}

impl RoundState {
    /// Whether hit/stand controls should be enabled.
    pub fn accepts_actions(self) -> bool {
        self == RoundState::PlayerTurn
    }
}

/// Result carried by a [`RoundOutcome`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Win,
    Lose,
    Push,
    /// The player is still to act
    InProgress,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultKind::Win => "win",
            ResultKind::Lose => "lose",
            ResultKind::Push => "push",
            ResultKind::InProgress => "in progress",
        };
        f.write_str(s)
    }
}

/// Event returned by every successful engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub result: ResultKind,
    pub player_total: u32,
    /// `None` while the dealer's hole card is hidden
    pub dealer_total: Option<u32>,
    /// Net bankroll change made by this call (stake deducted plus any payout).
    /// A bankroll reset is reported by `bankroll_reset` and not counted here.
    pub bankroll_delta: i64,
    /// Set when settlement left the bankroll empty and it was restored
    pub bankroll_reset: bool,
    /// Set when the round was settled on the opening deal
    pub natural: bool,
    /// Human-readable narration of what happened, oldest first
    pub log: Vec<String>,
}

impl RoundOutcome {
    pub fn is_settled(&self) -> bool {
        self.result != ResultKind::InProgress
    }
}

/// The dealer's hand as the player is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerView {
    /// `None` marks a face-down card
    pub cards: Vec<Option<Card>>,
    /// `None` while any card is face down
    pub total: Option<u32>,
}

impl DealerView {
    pub fn is_hidden(&self) -> bool {
        self.total.is_none()
    }
}

impl fmt::Display for DealerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                f.write_str("  ")?;
            }
            match c {
                Some(card) => write!(f, "{}", card)?,
                None => f.write_str("??")?,
            }
            first = false;
        }
        Ok(())
    }
}

/// Builds the visible dealer hand: every card after the first is face down
/// while the player is acting, everything is face up otherwise.
pub fn dealer_view(hand: &Hand, state: RoundState) -> DealerView {
    if state == RoundState::PlayerTurn && hand.len() >= 2 {
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, c)| if i == 0 { Some(*c) } else { None })
            .collect();
        DealerView { cards, total: None }
    } else {
        DealerView {
            cards: hand.cards().iter().copied().map(Some).collect(),
            total: if hand.is_empty() {
                None
            } else {
                Some(hand.value())
            },
        }
    }
}
