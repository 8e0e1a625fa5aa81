use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};

/// Single-deck card source that refills itself when exhausted.
///
/// Cards are dealt from `position` forward. When every card has been dealt,
/// the next [`Shoe::deal`] replaces the contents with a freshly shuffled
/// 52-card deck before dealing, so dealing never fails.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
    seed: u64,
    reshuffles: u32,
}

impl Shoe {
    /// Create a shoe holding one full deck shuffled with `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            reshuffles: 0,
        };
        shoe.refill();
        shoe
    }

    /// Create a shoe that deals `cards` in the given order first.
    ///
    /// Once the stacked cards run out the shoe refills with a full deck
    /// shuffled from `seed`, exactly like a regular shoe.
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            reshuffles: 0,
        }
    }

    pub fn deal(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.refill();
            self.reshuffles += 1;
            debug!(reshuffles = self.reshuffles, "shoe exhausted, reshuffled");
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    fn refill(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Number of times the shoe refilled itself after running dry.
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
