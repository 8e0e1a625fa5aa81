//! Exit code and stream discipline for every subcommand.
//!
//! - Successful commands (including a quit or EOF during play) return 0
//! - Argument and validation errors return 2
//! - Errors are written to stderr, never stdout

use std::io::Cursor;

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = blackjack_cli::run_with_input(args.iter().copied(), &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_sim_success_returns_zero() {
    let (code, out, _) = run(&["blackjack", "sim", "--rounds", "3", "--seed", "42"], "");
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played: 3"));
}

#[test]
fn test_play_eof_returns_zero() {
    let (code, out, err) = run(&["blackjack", "play", "--seed", "42"], "");
    assert_eq!(code, 0, "EOF at the bet prompt ends the session cleanly");
    assert!(out.contains("Final bankroll: 1000"));
    assert!(err.is_empty());
}

#[test]
fn test_play_quit_mid_round_returns_zero() {
    // A natural skips the action prompt; the second q then quits at the bet prompt.
    let (code, out, _) = run(&["blackjack", "play", "--seed", "5"], "\nq\nq\n");
    assert_eq!(code, 0);
    assert!(out.contains("Final bankroll: "));
}

#[test]
fn test_unknown_subcommand_returns_two() {
    let (code, out, err) = run(&["blackjack", "split"], "");
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Commands:"));
}

#[test]
fn test_missing_required_flag_returns_two() {
    let (code, _, err) = run(&["blackjack", "sim"], "");
    assert_eq!(code, 2);
    assert!(err.contains("--rounds"));
}

#[test]
fn test_non_numeric_flag_returns_two() {
    let (code, _, _) = run(&["blackjack", "play", "--bet", "ten"], "");
    assert_eq!(code, 2);
}

#[test]
fn test_validation_error_goes_to_stderr() {
    let (code, out, err) = run(
        &["blackjack", "sim", "--rounds", "5", "--stand-on", "30"],
        "",
    );
    assert_eq!(code, 2);
    assert!(!out.contains("Error:"));
    assert!(err.contains("Error: Invalid input: stand-on must be between 2 and 21"));
}

#[test]
fn test_zero_bet_flag_returns_two() {
    let (code, _, err) = run(&["blackjack", "sim", "--rounds", "5", "--bet", "0"], "");
    assert_eq!(code, 2);
    assert!(err.contains("bet must be >= 1"));
}

#[test]
fn test_version_returns_zero() {
    let (code, out, _) = run(&["blackjack", "--version"], "");
    assert_eq!(code, 0);
    assert!(out.contains("blackjack"));
}
