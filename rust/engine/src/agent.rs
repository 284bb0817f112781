//! Strategy capability and the request protocol around it.
//!
//! A [`Strategy`] sees a read-only [`TurnContext`] and answers with a
//! loosely-typed [`Decision`]. The engine normalizes and validates the
//! answer before anything reaches the state machine; a failure, a panic or
//! an illegal request becomes a fold with an explanation.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;
use thiserror::Error;

use crate::cards::Card;
use crate::game::{GameState, Phase};
use crate::player::{ActionKind, PlayerAction};
use crate::rules::{resolve_all_in, validate_request, Requested};

/// Raised by a strategy that cannot produce a decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no decision returned")]
    NoDecision,
    #[error("{0}")]
    Failed(String),
}

/// A strategy's answer: an action name, optionally with an amount.
/// Negative amounts are representable so they can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Decision {
    Action(String),
    WithAmount(String, i64),
}

impl Decision {
    pub fn fold() -> Self {
        Decision::Action("fold".into())
    }
    pub fn check() -> Self {
        Decision::Action("check".into())
    }
    /// Call for exactly `amount` chips, which must equal what is owed.
    pub fn call(amount: u32) -> Self {
        Decision::WithAmount("call".into(), amount as i64)
    }
    /// Raise by `amount` on top of the call.
    pub fn raise(amount: u32) -> Self {
        Decision::WithAmount("raise".into(), amount as i64)
    }
    pub fn all_in() -> Self {
        Decision::Action("all-in".into())
    }

    fn name(&self) -> &str {
        match self {
            Decision::Action(n) | Decision::WithAmount(n, _) => n,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Action(n) => write!(f, "{}", n),
            Decision::WithAmount(n, a) => write!(f, "{} {}", n, a),
        }
    }
}

/// A betting strategy occupying one seat.
pub trait Strategy: Send {
    fn name(&self) -> &str;
    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError>;
}

/// The acting seat's own view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfView {
    pub name: String,
    pub chips: u32,
    pub hole_cards: Vec<Card>,
    pub current_bet: u32,
    pub total_bet: u32,
    pub all_in: bool,
}

/// Another seat's most recent move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatMove {
    pub name: String,
    pub last_action: Option<ActionKind>,
}

/// Everything a strategy may know when it is asked to act. Other seats'
/// hole cards are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnContext {
    pub me: SelfView,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub call_required: u32,
    pub phase: Phase,
    /// Every other seat, in seat order
    pub other_moves: Vec<SeatMove>,
    /// The seat immediately before this one, wrapping around
    pub previous_move: SeatMove,
}

impl TurnContext {
    pub fn build(state: &GameState, seat: usize) -> Option<Self> {
        let seats = state.seats();
        let me = seats.get(seat)?;
        let move_of = |i: usize| SeatMove {
            name: seats[i].name().to_string(),
            last_action: seats[i].last_action(),
        };
        let previous = (seat + seats.len() - 1) % seats.len();
        Some(Self {
            me: SelfView {
                name: me.name().to_string(),
                chips: me.chips(),
                hole_cards: me.hole_cards().to_vec(),
                current_bet: me.current_bet(),
                total_bet: me.total_bet(),
                all_in: me.is_all_in(),
            },
            community_cards: state.community_cards().to_vec(),
            pot: state.pot(),
            current_bet: state.current_bet(),
            call_required: state.call_required(seat),
            phase: state.phase(),
            other_moves: (0..seats.len()).filter(|&i| i != seat).map(move_of).collect(),
            previous_move: move_of(previous),
        })
    }
}

/// Maps a raw decision onto the protocol's vocabulary. Names are
/// case-insensitive, several spellings mean all-in, and an amount that is
/// negative or out of range is treated as missing.
pub fn normalize(decision: &Decision) -> Requested {
    let name = decision.name().trim().to_lowercase();
    let amount = match decision {
        Decision::Action(_) => Some(0),
        Decision::WithAmount(_, a) => u32::try_from(*a).ok(),
    };
    match name.as_str() {
        "fold" => Requested::Fold,
        "check" => Requested::Check,
        "all-in" | "all in" | "allin" | "shove" => Requested::AllIn,
        "call" => Requested::Call(amount),
        "raise" => Requested::Raise(amount),
        _ => Requested::Unknown(name),
    }
}

/// Asks the seat's strategy for an action and returns something the state
/// machine may apply. Anything unusable becomes a fold; the reason is left
/// on the seat so the resulting note explains it.
pub fn request_action(
    state: &mut GameState,
    seat: usize,
    strategy: &mut dyn Strategy,
) -> PlayerAction {
    let Some(ctx) = TurnContext::build(state, seat) else {
        return PlayerAction::Fold;
    };
    let name = ctx.me.name.clone();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy.decide(&ctx)));
    let decision = match outcome {
        Ok(Ok(d)) => d,
        Ok(Err(e)) => {
            tracing::warn!(seat = %name, error = %e, "strategy failed to decide");
            state.seats[seat]
                .set_pending_invalid_reason(format!("{}'s agent failed to decide ({}).", name, e));
            return PlayerAction::Fold;
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            tracing::warn!(seat = %name, panic = %msg, "strategy panicked");
            state.seats[seat]
                .set_pending_invalid_reason(format!("{}'s agent crashed ({}).", name, msg));
            return PlayerAction::Fold;
        }
    };

    let requested = normalize(&decision);
    tracing::debug!(seat = %name, decision = %decision, call_required = ctx.call_required, "strategy decided");
    if !validate_request(ctx.me.chips, ctx.call_required, &requested) {
        tracing::debug!(seat = %name, decision = %decision, "rejected strategy request");
        state.seats[seat].set_pending_invalid_reason(format!(
            "{}'s agent attempted an invalid move ({}).",
            name, decision
        ));
        return PlayerAction::Fold;
    }

    match requested {
        Requested::Fold => PlayerAction::Fold,
        Requested::Check => PlayerAction::Check,
        Requested::Call(_) => PlayerAction::Call,
        Requested::Raise(amount) => PlayerAction::Raise(amount.unwrap_or(0)),
        Requested::AllIn => match resolve_all_in(ctx.me.chips, ctx.call_required) {
            Some(action) => action,
            None => {
                tracing::debug!(seat = %name, "all-in cannot cover the call");
                state.seats[seat].set_pending_invalid_reason(format!(
                    "{}'s agent went all-in for ${} but ${} is owed.",
                    name, ctx.me.chips, ctx.call_required
                ));
                PlayerAction::Fold
            }
        },
        Requested::Unknown(_) => PlayerAction::Fold,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
