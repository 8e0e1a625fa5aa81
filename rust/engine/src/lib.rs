//! # blackjack-engine: Blackjack Round Engine
//!
//! A single-player blackjack engine: one player against a house dealer that
//! draws to 17, with a bankroll tracked across rounds. The engine owns all
//! game state; a front end drives it one call per user action and renders the
//! returned outcome events.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`shoe`] - Self-refilling single-deck shoe with seeded ChaCha20 shuffling
//! - [`hand`] - Hand value with soft-ace reduction
//! - [`engine`] - Round state machine, dealer play and settlement
//! - [`game`] - Round state, outcome events and the dealer view
//! - [`rules`] - Dealer drawing rule and payout table
//! - [`bankroll`] - Player balance and the exhaustion reset
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::engine::Engine;
//! use blackjack_engine::game::RoundState;
//!
//! let mut engine = Engine::new(Some(42));
//! engine.start_round(10).unwrap();
//!
//! while engine.state() == RoundState::PlayerTurn {
//!     let outcome = if engine.player_hand().value() < 17 {
//!         engine.hit().unwrap()
//!     } else {
//!         engine.stand().unwrap()
//!     };
//!     for line in &outcome.log {
//!         println!("{}", line);
//!     }
//! }
//! println!("Bankroll: {}", engine.bankroll());
//! ```
//!
//! ## Hand Values
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::value_of;
//!
//! let hand = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Nine, Suit::Clubs),
//! ];
//! assert_eq!(value_of(&hand), 21);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shoe order is reproducible from its seed:
//!
//! ```rust
//! use blackjack_engine::shoe::Shoe;
//!
//! let mut a = Shoe::new_with_seed(7);
//! let mut b = Shoe::new_with_seed(7);
//! assert_eq!(a.deal(), b.deal());
//! ```

pub mod bankroll;
pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod shoe;
