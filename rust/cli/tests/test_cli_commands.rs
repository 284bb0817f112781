use pokerarena_cli::run;
use serde_json::Value;

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn deal_is_reproducible_from_a_seed() {
    let args = [
        "pokerarena",
        "deal",
        "--seed",
        "42",
        "--seats",
        "shove,passive,random",
    ];
    let (code, first, err) = run_capture(&args);
    assert_eq!(code, 0, "{err}");
    let (_, second, _) = run_capture(&args);
    assert_eq!(first, second);

    let lines: Vec<&str> = first.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("random: "));
    assert!(lines[3].starts_with("Board: "));
    assert!(lines[4].starts_with("Winners: "));
}

#[test]
fn play_runs_a_tournament_to_the_end() {
    let (code, out, err) = run_capture(&[
        "pokerarena",
        "play",
        "--seed",
        "3",
        "--seats",
        "shove,passive",
        "--max-hands",
        "50",
        "--interval-ms",
        "0",
    ]);
    assert_eq!(code, 0, "{err}");
    assert!(out.starts_with("Tournament: 2 seats, $100 each, seed 3"));
    assert!(out.contains("!!! === NEW HAND #1 DEALT ==="));
    assert!(out.contains("PHASE: PREFLOP"));
    assert!(out.contains("CURRENT PLAYER: "));
    assert!(out.contains("Champion: ") || out.contains("Hand limit: "));
    assert!(out.contains("Final standings:"));
}

#[test]
fn quiet_play_prints_notes_but_no_table() {
    let (code, out, err) = run_capture(&[
        "pokerarena",
        "play",
        "--seed",
        "9",
        "--seats",
        "pushover,pushover",
        "--max-hands",
        "3",
        "--interval-ms",
        "0",
        "--quiet",
    ]);
    assert_eq!(code, 0, "{err}");
    assert!(!out.contains("PHASE:"));
    assert!(out.contains("!!! === NEW HAND #3 DEALT ==="));
    assert!(out.contains("!!! Hand limit reached. pushover #1, pushover #2 tie for the lead with $100 each."));
    assert!(out.contains("Hand limit: pushover #1, pushover #2 lead with $100 after 3 hands"));
}

#[test]
fn sim_tallies_champions_and_writes_histories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, out, err) = run_capture(&[
        "pokerarena",
        "sim",
        "--tournaments",
        "3",
        "--seed",
        "11",
        "--seats",
        "shove,passive",
        "--max-hands",
        "30",
        "--output",
        &path_str,
    ]);
    assert_eq!(code, 0, "{err}");
    assert!(out.contains("Simulating 3 tournaments with 2 seats (base seed 11)"));
    assert!(out.contains("Tournament 1 (seed 11)"));
    assert!(out.contains("Tournament 3 (seed 13)"));
    assert!(out.contains("Champions:"));
    assert!(out.contains("  shove: "));
    assert!(out.contains("Hand-limit finishes: "));

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert!(records.len() >= 3);
    for r in &records {
        assert!(!r["hand_id"].as_str().unwrap().is_empty());
        assert!(r["hand_number"].as_u64().unwrap() >= 1);
        assert!(r["ts"].as_str().is_some());
        assert!(r["result"].as_str().unwrap().starts_with("Winners: "));
    }
}

#[test]
fn unknown_strategy_is_reported() {
    let (code, out, err) = run_capture(&["pokerarena", "deal", "--seats", "shove,telepath"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: "));
    assert!(err.contains("unknown strategy 'telepath'"));
}

#[test]
fn a_single_seat_is_rejected() {
    let (code, _, err) = run_capture(&["pokerarena", "sim", "--seats", "shove"]);
    assert_eq!(code, 2);
    assert!(err.contains("at least two seats"));
}

#[test]
fn flag_values_are_range_checked() {
    let (code, _, err) = run_capture(&["pokerarena", "play", "--max-hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("Commands:"));
}

#[test]
fn tables_one_deck_or_the_pot_cannot_hold_are_rejected() {
    let crowd = vec!["passive"; 24].join(",");
    let (code, out, err) = run_capture(&["pokerarena", "deal", "--seats", &crowd]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("one deck deals at most 23"));

    let (code, _, err) = run_capture(&[
        "pokerarena",
        "deal",
        "--chips",
        "3000000000",
        "--seats",
        "shove,passive",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("chips in total"));
}
