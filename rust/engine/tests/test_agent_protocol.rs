mod common;

use common::{dealt_table, Scripted};
use pokerarena_engine::agent::{request_action, Decision, Strategy, StrategyError, TurnContext};
use pokerarena_engine::game::ActionOutcome;
use pokerarena_engine::player::{ActionKind, PlayerAction};

struct Failing;
impl Strategy for Failing {
    fn name(&self) -> &str {
        "failing"
    }
    fn decide(&mut self, _ctx: &TurnContext) -> Result<Decision, StrategyError> {
        Err(StrategyError::Failed("model offline".into()))
    }
}

struct Panicking;
impl Strategy for Panicking {
    fn name(&self) -> &str {
        "panicking"
    }
    fn decide(&mut self, _ctx: &TurnContext) -> Result<Decision, StrategyError> {
        panic!("boom")
    }
}

#[test]
fn context_exposes_only_public_information() {
    let mut gs = dealt_table(&[100, 80, 60], 21);
    gs.apply_action(1, PlayerAction::Raise(10));
    let ctx = TurnContext::build(&gs, 2).unwrap();

    assert_eq!(ctx.me.name, "P2");
    assert_eq!(ctx.me.chips, 60);
    assert_eq!(ctx.me.hole_cards, gs.seats()[2].hole_cards().to_vec());
    assert_eq!(ctx.call_required, 10);
    assert_eq!(ctx.pot, 10);
    assert_eq!(ctx.other_moves.len(), 2);
    assert_eq!(ctx.other_moves[1].name, "P1");
    assert_eq!(ctx.other_moves[1].last_action, Some(ActionKind::Raise));
    assert_eq!(ctx.previous_move.name, "P1");

    let wrap = TurnContext::build(&gs, 0).unwrap();
    assert_eq!(wrap.previous_move.name, "P2");
    assert!(TurnContext::build(&gs, 3).is_none());
}

#[test]
fn strategy_error_folds_with_note() {
    let mut gs = dealt_table(&[100, 100], 1);
    let action = request_action(&mut gs, 1, &mut Failing);
    assert_eq!(action, PlayerAction::Fold);
    let outcome = gs.apply_action(1, action);
    assert!(matches!(outcome, ActionOutcome::AutoFolded { .. }));
    assert_eq!(
        gs.pop_last_note().as_deref(),
        Some("P1's agent failed to decide (model offline). Automatic fold applied.")
    );
    assert_eq!(gs.seats()[1].last_action_label(), Some("Invalid -> Fold"));
}

#[test]
fn panicking_strategy_is_contained() {
    let mut gs = dealt_table(&[100, 100], 1);
    let action = request_action(&mut gs, 1, &mut Panicking);
    assert_eq!(action, PlayerAction::Fold);
    gs.apply_action(1, action);
    let note = gs.pop_last_note().unwrap();
    assert!(note.contains("crashed (boom)"), "{note}");
}

#[test]
fn wrong_call_amount_is_rejected() {
    let mut gs = dealt_table(&[100, 100, 100], 1);
    gs.apply_action(1, PlayerAction::Raise(20));
    let mut s = Scripted::new("s", vec![Decision::call(5)]);
    let action = request_action(&mut gs, 2, &mut s);
    assert_eq!(action, PlayerAction::Fold);
    gs.apply_action(2, action);
    assert_eq!(
        gs.pop_last_note().as_deref(),
        Some("P2's agent attempted an invalid move (call 5). Automatic fold applied.")
    );
}

#[test]
fn negative_and_unknown_requests_fold() {
    let mut gs = dealt_table(&[100, 100, 100], 1);
    let mut s = Scripted::new(
        "s",
        vec![
            Decision::WithAmount("raise".into(), -3),
            Decision::Action("limp".into()),
        ],
    );
    assert_eq!(request_action(&mut gs, 1, &mut s), PlayerAction::Fold);
    assert_eq!(request_action(&mut gs, 2, &mut s), PlayerAction::Fold);
}

#[test]
fn all_in_spellings_commit_whole_stack() {
    let mut gs = dealt_table(&[100, 100, 100], 1);
    gs.apply_action(1, PlayerAction::Raise(30));
    let mut s = Scripted::new("s", vec![Decision::Action("  SHOVE".into())]);
    let action = request_action(&mut gs, 2, &mut s);
    assert_eq!(action, PlayerAction::Raise(70));
    gs.apply_action(2, action);
    assert!(gs.seats()[2].is_all_in());
    assert_eq!(gs.current_bet(), 100);
}

#[test]
fn all_in_short_of_the_call_folds() {
    let mut gs = dealt_table(&[100, 100, 20], 1);
    gs.apply_action(1, PlayerAction::Raise(50));
    let mut s = Scripted::new("s", vec![Decision::all_in()]);
    assert_eq!(request_action(&mut gs, 2, &mut s), PlayerAction::Fold);
}

#[test]
fn exact_call_and_sized_raise_pass_through() {
    let mut gs = dealt_table(&[100, 100, 100], 1);
    gs.apply_action(1, PlayerAction::Raise(20));
    let mut s = Scripted::new("s", vec![Decision::call(20), Decision::raise(15)]);
    assert_eq!(request_action(&mut gs, 2, &mut s), PlayerAction::Call);
    assert_eq!(request_action(&mut gs, 0, &mut s), PlayerAction::Raise(15));
    assert_eq!(s.seen.len(), 2);
    assert_eq!(s.seen[0].call_required, 20);
}
