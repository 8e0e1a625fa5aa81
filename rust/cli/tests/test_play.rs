//! Interactive play through the public entry point with scripted stdin.

use blackjack_engine::logger::RoundRecord;
use std::io::Cursor;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["blackjack", "play"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = blackjack_cli::run_with_input(argv, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn same_seed_same_session() {
    let input = "\nstand\nstand\n\nhit\nstand\nstand\n";
    let a = play(&["--seed", "11", "--rounds", "2"], input);
    let b = play(&["--seed", "11", "--rounds", "2"], input);
    assert_eq!(a, b);
}

#[test]
fn bet_prompt_offers_flag_value() {
    let (code, out, _) = play(&["--bet", "50", "--seed", "1"], "q\n");
    assert_eq!(code, 0);
    assert!(out.contains("Bet [50] (q to quit): "));
}

#[test]
fn dealer_hole_card_is_hidden_while_player_acts() {
    let (_, out, _) = play(&["--seed", "3", "--rounds", "1"], "\nstand\nstand\n");
    if out.contains("Action (hit/stand/q)") {
        assert!(out.contains("??"), "hole card should be masked: {}", out);
        assert!(out.contains("Dealer reveals"));
    }
    assert!(out.contains("Rounds played: 1"));
}

#[test]
fn rejected_input_never_changes_bankroll() {
    let (code, out, err) = play(&["--seed", "8"], "0\nlots\n1001\nq\n");
    assert_eq!(code, 0);
    assert_eq!(err.matches("Error: ").count(), 3);
    assert!(err.contains("Insufficient bankroll"));
    assert!(out.contains("Rounds played: 0"));
    assert!(out.contains("Final bankroll: 1000"));
}

#[test]
fn history_file_records_settled_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("play.jsonl");
    let path_str = path.to_string_lossy().into_owned();

    let (code, out, _) = play(
        &["--seed", "21", "--rounds", "3", "--history", path_str.as_str()],
        "\nstand\n\nstand\n\nstand\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played: 3"));

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    for (i, r) in records.iter().enumerate() {
        assert!(r.round_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(r.seed, Some(21));
        assert!(r.ts.is_some());
    }
    let net: i64 = records.iter().map(|r| r.bankroll_delta).sum();
    assert_eq!(records[2].bankroll_after as i64, 1000 + net);
}
