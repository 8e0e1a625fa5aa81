use blackjack_engine::cards::{Card, Rank as R, Suit as S};
use blackjack_engine::engine::Engine;
use blackjack_engine::errors::GameError;
use blackjack_engine::game::{ResultKind, RoundState};
use blackjack_engine::shoe::Shoe;

/// Engine whose shoe deals `ranks` in order: player, player, dealer, dealer, then draws.
fn stacked(ranks: &[R], bankroll: u32) -> Engine {
    let cards = ranks.iter().map(|&r| Card::new(r, S::Spades)).collect();
    Engine::with_shoe(Shoe::stacked(cards, 11), bankroll)
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut eng = stacked(&[R::Ace, R::King, R::Five, R::Five], 1000);
    let out = eng.start_round(10).unwrap();

    assert_eq!(out.result, ResultKind::Win);
    assert!(out.natural);
    assert_eq!(out.player_total, 21);
    assert_eq!(out.dealer_total, Some(10));
    assert_eq!(out.bankroll_delta, 15);
    assert_eq!(eng.bankroll(), 1015);
    assert_eq!(eng.state(), RoundState::Settled);
    assert!(out.log.iter().any(|l| l.contains("Blackjack! You win 25")));
}

#[test]
fn both_naturals_push() {
    let mut eng = stacked(&[R::Ace, R::King, R::Ace, R::Queen], 1000);
    let out = eng.start_round(10).unwrap();

    assert_eq!(out.result, ResultKind::Push);
    assert!(out.natural);
    assert_eq!(out.bankroll_delta, 0);
    assert_eq!(eng.bankroll(), 1000);
    assert_eq!(eng.state(), RoundState::Settled);
}

#[test]
fn dealer_natural_alone_does_not_end_the_deal() {
    let mut eng = stacked(&[R::Ten, R::Nine, R::Ace, R::King], 1000);
    let out = eng.start_round(10).unwrap();
    assert_eq!(out.result, ResultKind::InProgress);
    assert_eq!(eng.state(), RoundState::PlayerTurn);
    assert_eq!(out.dealer_total, None);
}

#[test]
fn bet_is_deducted_when_round_starts() {
    let mut eng = stacked(&[R::Ten, R::Nine, R::Five, R::Five], 1000);
    let out = eng.start_round(10).unwrap();
    assert_eq!(eng.bankroll(), 990);
    assert_eq!(eng.state(), RoundState::PlayerTurn);
    assert_eq!(out.bankroll_delta, -10);
    assert_eq!(out.player_total, 19);
}

#[test]
fn bust_loses_without_dealer_play() {
    let mut eng = stacked(&[R::Ten, R::Nine, R::Five, R::Six, R::Six], 1000);
    eng.start_round(10).unwrap();
    let out = eng.hit().unwrap();

    assert_eq!(out.result, ResultKind::Lose);
    assert_eq!(out.player_total, 25);
    assert_eq!(out.bankroll_delta, 0);
    assert_eq!(eng.bankroll(), 990);
    assert_eq!(eng.state(), RoundState::Settled);
    assert_eq!(eng.dealer_hand().len(), 2, "dealer must not draw");
    assert!(out.log.iter().any(|l| l == "Player busted!"));
}

#[test]
fn hit_below_twenty_one_keeps_turn() {
    let mut eng = stacked(&[R::Five, R::Four, R::Ten, R::Seven, R::Three], 1000);
    eng.start_round(10).unwrap();
    let out = eng.hit().unwrap();
    assert_eq!(out.result, ResultKind::InProgress);
    assert_eq!(out.player_total, 12);
    assert_eq!(eng.state(), RoundState::PlayerTurn);
    assert_eq!(eng.player_hand().len(), 3);
}

#[test]
fn dealer_draws_to_seventeen_and_beats_player() {
    let mut eng = stacked(&[R::Ten, R::Eight, R::Ten, R::Six, R::Five], 1000);
    eng.start_round(10).unwrap();
    let out = eng.stand().unwrap();

    assert_eq!(out.result, ResultKind::Lose);
    assert_eq!(out.player_total, 18);
    assert_eq!(out.dealer_total, Some(21));
    assert_eq!(eng.dealer_hand().len(), 3);
    assert_eq!(eng.bankroll(), 990);
}

#[test]
fn dealer_bust_pays_even_money() {
    let mut eng = stacked(&[R::Ten, R::Eight, R::Ten, R::Six, R::King], 1000);
    eng.start_round(10).unwrap();
    let out = eng.stand().unwrap();

    assert_eq!(out.result, ResultKind::Win);
    assert_eq!(out.dealer_total, Some(26));
    assert_eq!(out.bankroll_delta, 20);
    assert_eq!(eng.bankroll(), 1010);
    assert!(out.log.iter().any(|l| l == "Dealer busted!"));
}

#[test]
fn higher_total_wins() {
    let mut eng = stacked(&[R::Ten, R::King, R::Ten, R::Seven], 1000);
    eng.start_round(50).unwrap();
    let out = eng.stand().unwrap();
    assert_eq!(out.result, ResultKind::Win);
    assert_eq!(eng.bankroll(), 1050);
}

#[test]
fn equal_totals_push() {
    let mut eng = stacked(&[R::Ten, R::Eight, R::Ten, R::Eight], 1000);
    eng.start_round(10).unwrap();
    let out = eng.stand().unwrap();
    assert_eq!(out.result, ResultKind::Push);
    assert_eq!(out.bankroll_delta, 10);
    assert_eq!(eng.bankroll(), 1000);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut eng = stacked(&[R::Ten, R::Seven, R::Ace, R::Six], 1000);
    eng.start_round(10).unwrap();
    let out = eng.stand().unwrap();
    assert_eq!(eng.dealer_hand().len(), 2);
    assert_eq!(out.dealer_total, Some(17));
    assert_eq!(out.result, ResultKind::Push);
}

#[test]
fn insufficient_bankroll_changes_nothing() {
    let mut eng = Engine::new(Some(5));
    let err = eng.start_round(1001).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientBankroll {
            bet: 1001,
            bankroll: 1000
        }
    );
    assert_eq!(eng.bankroll(), 1000);
    assert_eq!(eng.state(), RoundState::Idle);
    assert!(eng.player_hand().is_empty());
    assert_eq!(eng.shoe_remaining(), 52);
}

#[test]
fn zero_bet_is_invalid() {
    let mut eng = Engine::new(Some(5));
    assert_eq!(eng.start_round(0), Err(GameError::InvalidBet));
    assert_eq!(eng.bankroll(), 1000);
}

#[test]
fn start_during_player_turn_is_rejected() {
    let mut eng = stacked(&[R::Ten, R::Nine, R::Five, R::Five], 1000);
    eng.start_round(10).unwrap();
    let player_before = eng.player_hand().clone();

    assert_eq!(eng.start_round(10), Err(GameError::RoundInProgress));
    // invalid bet text would also fail, but the in-progress check comes first
    assert_eq!(eng.start_round(0), Err(GameError::RoundInProgress));
    assert_eq!(eng.bankroll(), 990);
    assert_eq!(eng.player_hand(), &player_before);
    assert_eq!(eng.state(), RoundState::PlayerTurn);
}

#[test]
fn dealer_hole_card_hidden_until_settled() {
    let mut eng = stacked(&[R::Ten, R::Eight, R::Nine, R::Eight], 1000);
    eng.start_round(10).unwrap();

    let view = eng.dealer_view();
    assert!(view.is_hidden());
    assert_eq!(view.cards.len(), 2);
    assert!(view.cards[0].is_some());
    assert!(view.cards[1].is_none());

    eng.stand().unwrap();
    let view = eng.dealer_view();
    assert_eq!(view.total, Some(17));
    assert!(view.cards.iter().all(|c| c.is_some()));
}

#[test]
fn new_round_clears_hands() {
    let mut eng = stacked(
        &[R::Ten, R::Eight, R::Ten, R::Six, R::Five, R::Two, R::Three, R::Four, R::Five],
        1000,
    );
    eng.start_round(10).unwrap();
    eng.stand().unwrap();
    assert_eq!(eng.dealer_hand().len(), 3);

    eng.start_round(10).unwrap();
    assert_eq!(eng.player_hand().len(), 2);
    assert_eq!(eng.dealer_hand().len(), 2);
    assert_eq!(eng.player_hand().value(), 5);
    assert_eq!(eng.rounds_played(), 2);
}

#[test]
fn shoe_exhaustion_mid_round_reshuffles_silently() {
    let mut eng = stacked(&[R::Two, R::Three, R::Ten, R::Seven], 1000);
    eng.start_round(10).unwrap();
    let out = eng.hit().unwrap();
    assert_eq!(eng.shoe_reshuffles(), 1);
    assert_eq!(eng.player_hand().len(), 3);
    assert!(out.player_total <= 16);
}

#[test]
fn seeded_sessions_replay_identically() {
    fn play(seed: u64) -> (u32, Vec<ResultKind>) {
        let mut eng = Engine::new(Some(seed));
        let mut results = Vec::new();
        for _ in 0..30 {
            let mut out = eng.start_round(25).unwrap();
            while eng.state() == RoundState::PlayerTurn {
                out = if eng.player_hand().value() < 17 {
                    eng.hit().unwrap()
                } else {
                    eng.stand().unwrap()
                };
            }
            results.push(out.result);
        }
        (eng.bankroll(), results)
    }
    assert_eq!(play(2024), play(2024));
}
