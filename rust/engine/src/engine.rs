use tracing::{debug, info};

use crate::bankroll::{Bankroll, STARTING_BANKROLL};
use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{dealer_view, DealerView, ResultKind, RoundOutcome, RoundState};
use crate::hand::{Hand, BLACKJACK};
use crate::rules::{dealer_must_draw, natural_payout, payout, settle};
use crate::shoe::Shoe;

/// Round engine for single-player blackjack against a house dealer.
///
/// Owns the shoe, both hands, the bankroll and the round state. The front end
/// calls [`Engine::start_round`], [`Engine::hit`] and [`Engine::stand`] in
/// response to user actions and renders the returned [`RoundOutcome`].
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
/// use blackjack_engine::game::RoundState;
///
/// let mut engine = Engine::new(Some(12345));
/// let outcome = engine.start_round(10).expect("bet within bankroll");
///
/// if engine.state() == RoundState::PlayerTurn {
///     let outcome = engine.stand().expect("round in progress");
///     assert!(outcome.is_settled());
/// } else {
///     // natural blackjack or push settled on the deal
///     assert!(outcome.natural);
/// }
/// assert_eq!(engine.state(), RoundState::Settled);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Card source, kept across rounds
    shoe: Shoe,
    /// Player's cards for the current round
    player: Hand,
    /// Dealer's cards for the current round
    dealer: Hand,
    bankroll: Bankroll,
    /// Stake for the current round, fixed once accepted
    bet: u32,
    state: RoundState,
    rounds_played: u32,
}

impl Engine {
    /// Engine with a freshly shuffled shoe and the default bankroll.
    /// A random seed is drawn when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self::with_shoe(Shoe::new_with_seed(seed), STARTING_BANKROLL)
    }

    pub fn with_shoe(shoe: Shoe, bankroll: u32) -> Self {
        Self {
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            bankroll: Bankroll::new(bankroll),
            bet: 0,
            state: RoundState::Idle,
            rounds_played: 0,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn bankroll(&self) -> u32 {
        self.bankroll.balance()
    }

    pub fn current_bet(&self) -> u32 {
        self.bet
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Full dealer hand regardless of state. Use [`Engine::dealer_view`] for
    /// anything shown to the player.
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn dealer_view(&self) -> DealerView {
        dealer_view(&self.dealer, self.state)
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn shoe_reshuffles(&self) -> u32 {
        self.shoe.reshuffles()
    }

    pub fn seed(&self) -> u64 {
        self.shoe.seed()
    }

    /// Place a bet and deal the opening hands.
    ///
    /// Deals player, player, dealer, dealer. A player natural settles the
    /// round immediately (3:2, or a push against a dealer 21); otherwise the
    /// engine waits for the player in [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundInProgress`] if the player is still to act
    /// - [`GameError::InvalidBet`] if `bet` is zero
    /// - [`GameError::InsufficientBankroll`] if `bet` exceeds the bankroll
    ///
    /// Nothing is changed when an error is returned.
    pub fn start_round(&mut self, bet: u32) -> Result<RoundOutcome, GameError> {
        if self.state == RoundState::PlayerTurn {
            return Err(GameError::RoundInProgress);
        }
        let before = self.bankroll.balance();
        self.bankroll.place_bet(bet)?;

        self.bet = bet;
        self.player.clear();
        self.dealer.clear();
        self.rounds_played += 1;
        for _ in 0..2 {
            let c = self.draw();
            self.player.push(c);
        }
        for _ in 0..2 {
            let c = self.draw();
            self.dealer.push(c);
        }

        let pv = self.player.value();
        let dv = self.dealer.value();
        let mut log = vec![
            format!("New round: bet {}", bet),
            format!("Player: {} -> {}", self.player, pv),
            format!("Dealer shows: {}", self.dealer.cards()[0]),
        ];
        info!(round = self.rounds_played, bet, player_total = pv, "round started");

        if pv == BLACKJACK {
            log.push(format!("Dealer reveals: {} -> {}", self.dealer, dv));
            let (result, credited) = if dv == BLACKJACK {
                log.push("Both have Blackjack. Push.".to_string());
                (ResultKind::Push, bet)
            } else {
                let winnings = natural_payout(bet);
                log.push(format!("Blackjack! You win {}", winnings));
                (ResultKind::Win, winnings)
            };
            self.bankroll.credit(credited);
            return Ok(self.finish(result, before, true, log));
        }

        self.state = RoundState::PlayerTurn;
        Ok(RoundOutcome {
            result: ResultKind::InProgress,
            player_total: pv,
            dealer_total: None,
            bankroll_delta: delta(before, self.bankroll.balance()),
            bankroll_reset: false,
            natural: false,
            log,
        })
    }

    /// Deal the player one card. Busting settles the round as a loss without
    /// the dealer playing.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInProgress`] unless the player is to act.
    pub fn hit(&mut self) -> Result<RoundOutcome, GameError> {
        if self.state != RoundState::PlayerTurn {
            return Err(GameError::NotInProgress);
        }
        let before = self.bankroll.balance();
        let card = self.draw();
        self.player.push(card);
        let pv = self.player.value();
        let mut log = vec![format!("Player hits: {} -> {}", card, pv)];

        if pv > BLACKJACK {
            log.push("Player busted!".to_string());
            log.push("You lost the bet.".to_string());
            return Ok(self.finish(ResultKind::Lose, before, false, log));
        }

        Ok(RoundOutcome {
            result: ResultKind::InProgress,
            player_total: pv,
            dealer_total: None,
            bankroll_delta: 0,
            bankroll_reset: false,
            natural: false,
            log,
        })
    }

    /// End the player's turn: the dealer plays out its hand and the round is
    /// settled.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInProgress`] unless the player is to act.
    pub fn stand(&mut self) -> Result<RoundOutcome, GameError> {
        if self.state != RoundState::PlayerTurn {
            return Err(GameError::NotInProgress);
        }
        let before = self.bankroll.balance();
        let pv = self.player.value();
        let mut log = vec![format!("Player stands with {}", pv)];

        self.play_dealer(&mut log);
        let dv = self.dealer.value();

        let result = settle(pv, dv);
        let credited = payout(result, self.bet);
        match result {
            ResultKind::Win => log.push(format!("You win! Winnings: {}", credited)),
            ResultKind::Push => log.push("Push: bet returned.".to_string()),
            _ => log.push("You lost the bet.".to_string()),
        }
        self.bankroll.credit(credited);
        Ok(self.finish(result, before, false, log))
    }

    fn play_dealer(&mut self, log: &mut Vec<String>) {
        log.push(format!(
            "Dealer reveals: {} -> {}",
            self.dealer,
            self.dealer.value()
        ));
        while dealer_must_draw(self.dealer.value()) {
            let card = self.draw();
            self.dealer.push(card);
            log.push(format!("Dealer hits: {} -> {}", card, self.dealer.value()));
        }
        let dv = self.dealer.value();
        if dv > BLACKJACK {
            log.push("Dealer busted!".to_string());
        } else {
            log.push(format!("Dealer stands with {}", dv));
        }
    }

    /// Common tail of every settlement: apply the exhaustion reset, move to
    /// `Settled` and build the outcome. Payouts must already be credited.
    fn finish(
        &mut self,
        result: ResultKind,
        before: u32,
        natural: bool,
        mut log: Vec<String>,
    ) -> RoundOutcome {
        let bankroll_delta = delta(before, self.bankroll.balance());
        let bankroll_reset = self.bankroll.reset_if_exhausted();
        if bankroll_reset {
            log.push(format!(
                "Bankroll exhausted. Reset to {}.",
                STARTING_BANKROLL
            ));
        }
        self.state = RoundState::Settled;

        let player_total = self.player.value();
        let dealer_total = self.dealer.value();
        info!(
            round = self.rounds_played,
            %result,
            player_total,
            dealer_total,
            bankroll = self.bankroll.balance(),
            bankroll_reset,
            "round settled"
        );
        RoundOutcome {
            result,
            player_total,
            dealer_total: Some(dealer_total),
            bankroll_delta,
            bankroll_reset,
            natural,
            log,
        }
    }

    fn draw(&mut self) -> Card {
        let c = self.shoe.deal();
        debug!(card = %c, remaining = self.shoe.remaining(), "dealt");
        c
    }
}

fn delta(before: u32, after: u32) -> i64 {
    i64::from(after) - i64::from(before)
}
