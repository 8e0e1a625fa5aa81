use crate::errors::GameError;

/// Balance the player starts with, and the balance restored when it runs out.
pub const STARTING_BANKROLL: u32 = 1000;

/// The player's chip balance.
///
/// Only bet placement and settlement change it. A bet can never take the
/// balance below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: u32,
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::new(STARTING_BANKROLL)
    }
}

impl Bankroll {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Deduct a stake. Rejects zero and anything above the current balance
    /// without touching the balance.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount == 0 {
            return Err(GameError::InvalidBet);
        }
        if amount > self.balance {
            return Err(GameError::InsufficientBankroll {
                bet: amount,
                bankroll: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// House-forgives rule: an empty bankroll is restored to
    /// [`STARTING_BANKROLL`]. Returns whether the reset happened.
    pub fn reset_if_exhausted(&mut self) -> bool {
        if self.balance == 0 {
            self.balance = STARTING_BANKROLL;
            true
        } else {
            false
        }
    }
}
