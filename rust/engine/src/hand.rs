use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Target total; anything above it is a bust.
pub const BLACKJACK: u32 = 21;

const ACE_REDUCTION: u32 = 10;

/// Blackjack value of a set of cards.
///
/// Every Ace starts at 11 and is reduced to 1, one at a time, while the total
/// is over 21. The result may still exceed 21 once no Ace is left to reduce.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::value_of;
///
/// let soft = [Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Nine, Suit::Hearts)];
/// assert_eq!(value_of(&soft), 20);
///
/// let hard = [
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::King, Suit::Spades),
/// ];
/// assert_eq!(value_of(&hard), 20);
/// ```
pub fn value_of(cards: &[Card]) -> u32 {
    let (total, _) = total_and_soft_aces(cards);
    total
}

/// Returns the reduced total and the number of Aces still counted as 11.
fn total_and_soft_aces(cards: &[Card]) -> (u32, u32) {
    let mut raw: u32 = cards.iter().map(|c| c.rank.points()).sum();
    let mut aces = cards.iter().filter(|c| c.rank.is_ace()).count() as u32;
    while raw > BLACKJACK && aces > 0 {
        raw -= ACE_REDUCTION;
        aces -= 1;
    }
    (raw, aces)
}

/// True when at least one Ace is still counted as 11.
pub fn is_soft(cards: &[Card]) -> bool {
    total_and_soft_aces(cards).1 > 0
}

pub fn is_bust(cards: &[Card]) -> bool {
    value_of(cards) > BLACKJACK
}

/// Two-card 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && value_of(cards) == BLACKJACK
}

/// Cards held by the player or the dealer during one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        value_of(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cards {
            if !first {
                f.write_str("  ")?;
            }
            write!(f, "{}", c)?;
            first = false;
        }
        Ok(())
    }
}
