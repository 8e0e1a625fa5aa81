use crate::game::ResultKind;
use crate::hand::BLACKJACK;

/// The dealer draws while below this total and stands on it, soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

/// Whether the dealer must take another card at `total`.
pub fn dealer_must_draw(total: u32) -> bool {
    total < DEALER_STANDS_ON
}

/// Resolves a round that went to settlement through the normal path.
///
/// `dealer_total` is ignored when the player has busted, since the dealer
/// never plays in that case.
///
/// # Examples
///
/// ```
/// use blackjack_engine::game::ResultKind;
/// use blackjack_engine::rules::settle;
///
/// assert_eq!(settle(22, 17), ResultKind::Lose);
/// assert_eq!(settle(18, 22), ResultKind::Win);
/// assert_eq!(settle(19, 19), ResultKind::Push);
/// assert_eq!(settle(18, 21), ResultKind::Lose);
/// ```
pub fn settle(player_total: u32, dealer_total: u32) -> ResultKind {
    if player_total > BLACKJACK {
        ResultKind::Lose
    } else if dealer_total > BLACKJACK || player_total > dealer_total {
        ResultKind::Win
    } else if player_total == dealer_total {
        ResultKind::Push
    } else {
        ResultKind::Lose
    }
}

/// Amount credited back for a settled result. The stake was already taken
/// when the bet was placed, so a win returns stake plus even money and a
/// push returns the stake alone.
pub fn payout(result: ResultKind, bet: u32) -> u32 {
    match result {
        ResultKind::Win => bet.saturating_mul(2),
        ResultKind::Push => bet,
        ResultKind::Lose | ResultKind::InProgress => 0,
    }
}

/// Natural blackjack pays 3:2, credited as `floor(bet * 2.5)`.
pub fn natural_payout(bet: u32) -> u32 {
    let credited = u64::from(bet) * 5 / 2;
    u32::try_from(credited).unwrap_or(u32::MAX)
}
