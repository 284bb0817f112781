#![allow(dead_code)]

use std::collections::VecDeque;

use pokerarena_engine::agent::{Decision, Strategy, StrategyError, TurnContext};
use pokerarena_engine::cards::{parse_cards, Card};
use pokerarena_engine::deck::Deck;
use pokerarena_engine::game::GameState;
use pokerarena_engine::player::Seat;

/// Deck that deals `holes[i]` to seat i (round-robin, as the dealer does)
/// followed by `board` as flop, turn and river.
pub fn stacked_deck(holes: &[&str], board: &str) -> Deck {
    let holes: Vec<Vec<Card>> = holes.iter().map(|h| parse_cards(h).unwrap()).collect();
    let mut order = Vec::new();
    for round in 0..2 {
        for h in &holes {
            order.push(h[round]);
        }
    }
    order.extend(parse_cards(board).unwrap());
    order.reverse();
    Deck::stacked(order)
}

pub fn seats(stacks: &[u32]) -> Vec<Seat> {
    stacks
        .iter()
        .enumerate()
        .map(|(i, &c)| Seat::new(format!("P{}", i), c))
        .collect()
}

/// Table with a fresh hand already dealt; dealer is seat 0.
pub fn dealt_table(stacks: &[u32], seed: u64) -> GameState {
    let mut gs = GameState::with_deck(seats(stacks), Deck::new_with_seed(seed)).unwrap();
    gs.start_hand().unwrap();
    gs
}

/// Checks when free, otherwise calls exactly.
pub struct Checker(pub String);

impl Strategy for Checker {
    fn name(&self) -> &str {
        &self.0
    }
    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        if ctx.call_required == 0 {
            Ok(Decision::check())
        } else {
            Ok(Decision::call(ctx.call_required))
        }
    }
}

/// Replays queued decisions, then behaves like [`Checker`].
pub struct Scripted {
    pub name: String,
    pub queue: VecDeque<Decision>,
    pub seen: Vec<TurnContext>,
}

impl Scripted {
    pub fn new(name: &str, decisions: Vec<Decision>) -> Self {
        Self {
            name: name.to_string(),
            queue: decisions.into(),
            seen: Vec::new(),
        }
    }
}

impl Strategy for Scripted {
    fn name(&self) -> &str {
        &self.name
    }
    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        self.seen.push(ctx.clone());
        if let Some(d) = self.queue.pop_front() {
            return Ok(d);
        }
        if ctx.call_required == 0 {
            Ok(Decision::check())
        } else {
            Ok(Decision::call(ctx.call_required))
        }
    }
}

pub struct Shover(pub String);

impl Strategy for Shover {
    fn name(&self) -> &str {
        &self.0
    }
    fn decide(&mut self, _ctx: &TurnContext) -> Result<Decision, StrategyError> {
        Ok(Decision::all_in())
    }
}
