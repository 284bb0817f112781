mod common;

use common::{dealt_table, seats, stacked_deck};
use pokerarena_engine::config::TableConfig;
use pokerarena_engine::errors::GameError;
use pokerarena_engine::deck::Deck;
use pokerarena_engine::game::{ActionOutcome, GameState, Phase, MAX_SEATS};
use pokerarena_engine::player::{PlayerAction, Seat};
use pokerarena_engine::showdown::{award_pot, determine_winners};

#[test]
fn raise_call_fold_closes_preflop_into_flop() {
    let mut gs = dealt_table(&[100, 100, 100], 11);

    assert_eq!(gs.apply_action(0, PlayerAction::Raise(20)), ActionOutcome::Applied);
    assert_eq!(gs.apply_action(1, PlayerAction::Call), ActionOutcome::Applied);
    assert_eq!(gs.apply_action(2, PlayerAction::Fold), ActionOutcome::Applied);

    assert!(gs.should_advance_phase());
    gs.advance_phase().unwrap();

    assert_eq!(gs.phase(), Phase::Flop);
    assert_eq!(gs.community_cards().len(), 3);
    assert_eq!(gs.pot(), 40);
    assert_eq!(gs.current_bet(), 0);
    assert_eq!(gs.pending_players().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(gs.seats()[0].last_action_label(), Some("Raise to $20"));
    assert_eq!(gs.seats()[1].last_action_label(), Some("Call $20"));
}

#[test]
fn phases_progress_to_showdown_and_stop() {
    let mut gs = dealt_table(&[100, 100], 5);
    let mut seen = vec![gs.phase()];
    for _ in 0..5 {
        gs.advance_phase().unwrap();
        if seen.last() != Some(&gs.phase()) {
            seen.push(gs.phase());
        }
    }
    assert_eq!(
        seen,
        vec![Phase::Preflop, Phase::Flop, Phase::Turn, Phase::River, Phase::Showdown]
    );
    assert_eq!(gs.community_cards().len(), 5);
    assert!(gs.seats().iter().all(|s| s.best_hand_name().is_some()));
}

#[test]
fn full_hand_with_stacked_deck_pays_the_best_hand() {
    let deck = stacked_deck(&["Ah Ad", "Kc Qc", "7s 2d"], "As 9c 4h Jd 3c");
    let mut gs = GameState::with_deck(seats(&[100, 100, 100]), deck).unwrap();
    gs.start_hand().unwrap();
    assert_eq!(gs.seats()[0].hole_cards().len(), 2);

    gs.apply_action(1, PlayerAction::Raise(10));
    gs.apply_action(2, PlayerAction::Call);
    gs.apply_action(0, PlayerAction::Call);
    while gs.phase() != Phase::Showdown {
        gs.advance_phase().unwrap();
    }
    let winners = determine_winners(&mut gs);
    assert_eq!(winners, vec![0]);
    assert_eq!(gs.seats()[0].best_hand_name(), Some("Three of Aces"));

    let award = award_pot(&mut gs, &winners);
    assert_eq!(award.shares, vec![(0, 30)]);
    assert_eq!(gs.seats()[0].chips(), 120);
    assert_eq!(gs.total_chips(), 300);
}

#[test]
fn table_setup_rejects_bad_configuration() {
    let err = GameState::new(&TableConfig::default(), &["solo"]).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));

    let zero = vec![Seat::new("A", 100), Seat::new("B", 0)];
    let err = GameState::with_deck(zero, Deck::new_with_seed(1)).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn hand_counter_and_note_advance_each_deal() {
    let mut gs = dealt_table(&[100, 100], 8);
    assert_eq!(gs.pop_last_note().as_deref(), Some("=== NEW HAND #1 DEALT ==="));
    gs.start_hand().unwrap();
    assert_eq!(gs.hand_count(), 2);
    assert_eq!(gs.dealer_position(), Some(1));
    assert_eq!(gs.current_player(), 0);
    assert_eq!(gs.pop_last_note().as_deref(), Some("=== NEW HAND #2 DEALT ==="));
}

#[test]
fn same_seed_deals_same_cards() {
    let cfg = TableConfig {
        seed: Some(77),
        ..TableConfig::default()
    };
    let mut a = GameState::new(&cfg, &["A", "B", "C"]).unwrap();
    let mut b = GameState::new(&cfg, &["A", "B", "C"]).unwrap();
    a.start_hand().unwrap();
    b.start_hand().unwrap();
    for (x, y) in a.seats().iter().zip(b.seats()) {
        assert_eq!(x.hole_cards(), y.hole_cards());
    }
}

#[test]
fn table_whose_chips_overflow_the_pot_is_rejected() {
    let cfg = TableConfig {
        starting_chips: 3_000_000_000,
        ..TableConfig::default()
    };
    let err = GameState::new(&cfg, &["A", "B"]).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));

    let half = u32::MAX / 2;
    let stacks = seats(&[half, u32::MAX - half]);
    let mut gs = GameState::with_deck(stacks, Deck::new_with_seed(2)).unwrap();
    gs.start_hand().unwrap();
    assert_eq!(gs.apply_action(1, PlayerAction::Raise(u32::MAX - half)), ActionOutcome::Applied);
    assert_eq!(
        gs.apply_action(0, PlayerAction::Call),
        ActionOutcome::AutoFolded {
            reason: format!("attempted to call ${} with only ${}", u32::MAX - half, half),
        }
    );
    assert_eq!(gs.total_chips(), u32::MAX as u64);
}

#[test]
fn seat_count_is_capped_by_one_deck() {
    let names: Vec<String> = (0..=MAX_SEATS).map(|i| format!("S{}", i)).collect();
    let err = GameState::new(&TableConfig::default(), &names).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));

    let mut gs = GameState::new(&TableConfig::default(), &names[..MAX_SEATS]).unwrap();
    gs.start_hand().unwrap();
    assert_eq!(gs.hand_count(), 1);
    while gs.phase() != Phase::Showdown {
        gs.advance_phase().unwrap();
    }
    assert_eq!(gs.community_cards().len(), 5);
    assert_eq!(gs.deck_remaining(), 52 - 2 * MAX_SEATS - 5);
}

#[test]
fn actions_after_showdown_are_ignored() {
    let mut gs = dealt_table(&[100, 100], 6);
    gs.apply_action(1, PlayerAction::Raise(10));
    gs.apply_action(0, PlayerAction::Call);
    while gs.phase() != Phase::Showdown {
        gs.advance_phase().unwrap();
    }

    assert_eq!(gs.apply_action(0, PlayerAction::Raise(30)), ActionOutcome::Ignored);
    assert_eq!(gs.apply_action(1, PlayerAction::Fold), ActionOutcome::Ignored);
    assert_eq!(gs.pot(), 20);
    assert_eq!(gs.seats()[0].chips(), 90);
    assert!(!gs.seats()[1].is_folded());
}

#[test]
fn new_hand_waits_for_the_pot_to_be_awarded() {
    let mut gs = dealt_table(&[100, 100], 9);
    gs.apply_action(1, PlayerAction::Raise(25));
    gs.apply_action(0, PlayerAction::Call);

    assert_eq!(gs.start_hand(), Err(GameError::PotNotAwarded(50)));
    assert_eq!(gs.hand_count(), 1);
    assert_eq!(gs.total_chips(), 200);

    while gs.phase() != Phase::Showdown {
        gs.advance_phase().unwrap();
    }
    let winners = determine_winners(&mut gs);
    award_pot(&mut gs, &winners);
    gs.start_hand().unwrap();
    assert_eq!(gs.hand_count(), 2);
}
