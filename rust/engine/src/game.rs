//! Per-hand betting state machine.
//!
//! [`GameState`] owns the seats, the board, the pot and the set of seats
//! that still owe an action. Every mutation goes through [`GameState::start_hand`],
//! [`GameState::apply_action`], [`GameState::advance_phase`] and
//! [`GameState::next_player`]; rule violations never return an error but fold
//! the offending seat and leave an explanation in the note channel.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::{GameError, InvalidAction};
use crate::player::{ActionKind, PlayerAction, Seat};
use crate::rules::{check_action, ValidatedAction};
use crate::showdown;

/// Betting phase of a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Hole cards dealt, no board
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands compared, pot awarded
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };
        f.write_str(s)
    }
}

/// What `apply_action` did with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was legal and applied
    Applied,
    /// The action broke a rule; the seat was folded instead
    AutoFolded { reason: String },
    /// Invalid seat, a seat that is already folded or all-in, or a hand
    /// already at showdown
    Ignored,
}

/// Seats that may still act this round: not folded, not all-in, holding
/// chips and not eliminated.
pub fn players_who_can_act(seats: &[Seat]) -> BTreeSet<usize> {
    seats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.can_act())
        .map(|(i, _)| i)
        .collect()
}

/// Largest table one deck can deal: two hole cards per seat plus the board.
pub const MAX_SEATS: usize = (52 - 5) / 2;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) seats: Vec<Seat>,
    pub(crate) community: Vec<Card>,
    pub(crate) pot: u32,
    /// Amount every seat must match this round
    pub(crate) current_bet: u32,
    pub(crate) dealer_position: Option<usize>,
    pub(crate) current_player: usize,
    pub(crate) phase: Phase,
    pub(crate) deck: Deck,
    pub(crate) pending: BTreeSet<usize>,
    pub(crate) hand_count: u32,
    pub(crate) last_note: Option<String>,
}

impl GameState {
    /// Seats `names` with the configured starting stack.
    pub fn new<S: AsRef<str>>(config: &TableConfig, names: &[S]) -> Result<Self, GameError> {
        config.validate()?;
        let seats = names
            .iter()
            .map(|n| Seat::new(n.as_ref(), config.starting_chips))
            .collect();
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_deck(seats, Deck::new_with_seed(seed))
    }

    /// Builds a table from prepared seats; used for uneven stacks and
    /// scripted decks.
    pub fn with_deck(seats: Vec<Seat>, deck: Deck) -> Result<Self, GameError> {
        if seats.len() < 2 {
            return Err(GameError::InvalidConfig(
                "at least two seats are required".into(),
            ));
        }
        if seats.len() > MAX_SEATS {
            return Err(GameError::InvalidConfig(format!(
                "{} seats requested but one deck deals at most {}",
                seats.len(),
                MAX_SEATS
            )));
        }
        if let Some(s) = seats.iter().find(|s| s.chips() == 0) {
            return Err(GameError::InvalidConfig(format!(
                "seat '{}' has no starting chips",
                s.name()
            )));
        }
        // pot and stacks are u32; the whole table must fit in one
        let total: u64 = seats.iter().map(|s| s.chips() as u64).sum();
        if total > u32::MAX as u64 {
            return Err(GameError::InvalidConfig(format!(
                "table holds {} chips in total, more than {}",
                total,
                u32::MAX
            )));
        }
        Ok(Self {
            seats,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            dealer_position: None,
            current_player: 0,
            phase: Phase::Preflop,
            deck,
            pending: BTreeSet::new(),
            hand_count: 0,
            last_note: None,
        })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn dealer_position(&self) -> Option<usize> {
        self.dealer_position
    }
    pub fn current_player(&self) -> usize {
        self.current_player
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pending_players(&self) -> &BTreeSet<usize> {
        &self.pending
    }
    pub fn hand_count(&self) -> u32 {
        self.hand_count
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Chips `seat` must add to match the table's current bet.
    pub fn call_required(&self, seat: usize) -> u32 {
        self.seats
            .get(seat)
            .map(|s| self.current_bet.saturating_sub(s.current_bet()))
            .unwrap_or(0)
    }

    /// Stacks plus pot; constant for the whole tournament.
    pub fn total_chips(&self) -> u64 {
        self.seats.iter().map(|s| s.chips() as u64).sum::<u64>() + self.pot as u64
    }

    pub fn non_folded_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_folded()).count()
    }

    /// Returns the latest engine note and clears it.
    pub fn pop_last_note(&mut self) -> Option<String> {
        self.last_note.take()
    }

    pub(crate) fn set_note(&mut self, note: String) {
        self.last_note = Some(note);
    }

    /// Deals a new hand: rotates the dealer, reshuffles, resets the seats
    /// still in the tournament and deals two hole cards to each of them.
    ///
    /// The previous pot must have been awarded first.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.pot > 0 {
            return Err(GameError::PotNotAwarded(self.pot));
        }
        self.hand_count += 1;
        self.deck.shuffle();
        self.community.clear();
        self.current_bet = 0;
        self.rotate_dealer();

        for seat in &mut self.seats {
            if seat.is_eliminated() || seat.chips() == 0 {
                seat.sit_out();
            } else {
                seat.reset_for_new_hand();
            }
        }

        for _ in 0..2 {
            for i in 0..self.seats.len() {
                if self.seats[i].chips() > 0 && !self.seats[i].is_folded() {
                    let card = self.deck.draw()?;
                    self.seats[i].give_card(card)?;
                }
            }
        }

        self.phase = Phase::Preflop;
        self.open_betting_round();

        tracing::info!(
            hand = self.hand_count,
            dealer = ?self.dealer_position,
            first_to_act = self.current_player,
            "hand dealt"
        );
        self.set_note(format!("=== NEW HAND #{} DEALT ===", self.hand_count));
        Ok(())
    }

    fn rotate_dealer(&mut self) {
        let n = self.seats.len();
        let start = self.dealer_position.map(|d| (d + 1) % n).unwrap_or(0);
        if let Some(dealer) = (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&i| self.seats[i].chips() > 0 && !self.seats[i].is_eliminated())
        {
            self.dealer_position = Some(dealer);
        }
    }

    /// Re-arms every seat that can act and points `current_player` at the
    /// first of them after the dealer.
    fn open_betting_round(&mut self) {
        self.pending = players_who_can_act(&self.seats);
        let n = self.seats.len();
        let start = self.dealer_position.map(|d| (d + 1) % n).unwrap_or(0);
        if let Some(first) = (0..n)
            .map(|offset| (start + offset) % n)
            .find(|i| self.pending.contains(i))
        {
            self.current_player = first;
        }
    }

    /// Validates and applies one action for `seat`. Rule violations fold the
    /// seat and record the reason; they are never reported as errors.
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> ActionOutcome {
        if self.phase == Phase::Showdown || !self.accepts_action_from(seat) {
            return ActionOutcome::Ignored;
        }

        let previous_bet = self.current_bet;
        let agent_note = self.seats[seat].take_pending_invalid_reason();
        self.last_note = None;

        let call_required = self.call_required(seat);
        let validated = match check_action(self.seats[seat].chips(), call_required, action) {
            Ok(v) => v,
            Err(e) => return self.auto_fold(seat, &e.to_string()),
        };

        let mut label = match validated {
            ValidatedAction::Fold => {
                self.seats[seat].fold();
                if let Some(note) = agent_note {
                    tracing::warn!(seat = %self.seats[seat].name(), "{}", note);
                    self.set_note(format!("{} Automatic fold applied.", note));
                    self.seats[seat].record_action(ActionKind::Fold, "Invalid -> Fold".into());
                    self.pending.remove(&seat);
                    return ActionOutcome::AutoFolded { reason: note };
                }
                "Fold".to_string()
            }
            ValidatedAction::Check => "Check".to_string(),
            ValidatedAction::Call(amount) => {
                if let Err(e) = self.seats[seat].bet(amount) {
                    return self.auto_fold(seat, &e.to_string());
                }
                self.pot += amount;
                format!("Call ${}", amount)
            }
            ValidatedAction::Raise(total) => {
                if let Err(e) = self.seats[seat].bet(total) {
                    return self.auto_fold(seat, &e.to_string());
                }
                self.pot += total;
                format!("Raise to ${}", self.seats[seat].current_bet())
            }
        };

        self.current_bet = previous_bet.max(self.seats[seat].current_bet());
        if self.current_bet > previous_bet {
            // a raise reopens action for everyone else
            self.pending = players_who_can_act(&self.seats);
            self.pending.remove(&seat);
        } else {
            self.pending.remove(&seat);
        }
        self.prune_pending();

        if self.seats[seat].is_all_in() {
            label.push_str(" (All-In)");
        }
        tracing::debug!(
            seat = %self.seats[seat].name(),
            phase = %self.phase,
            action = %label,
            pot = self.pot,
            "action applied"
        );
        self.seats[seat].record_action(action.kind(), label);
        ActionOutcome::Applied
    }

    /// Textual entry point for manual drivers: `fold`, `check`, `call` or
    /// `raise` with an amount. Anything else folds the seat.
    pub fn apply_named_action(&mut self, seat: usize, name: &str, amount: u32) -> ActionOutcome {
        let action = match name.trim().to_ascii_lowercase().as_str() {
            "fold" => PlayerAction::Fold,
            "check" => PlayerAction::Check,
            "call" => PlayerAction::Call,
            "raise" => PlayerAction::Raise(amount),
            other => {
                if !self.accepts_action_from(seat) {
                    return ActionOutcome::Ignored;
                }
                let reason = InvalidAction::Unknown(other.to_string()).to_string();
                return self.auto_fold(seat, &reason);
            }
        };
        self.apply_action(seat, action)
    }

    /// Drops folded or all-in seats from `pending` as a safety net.
    fn accepts_action_from(&mut self, seat: usize) -> bool {
        match self.seats.get(seat) {
            None => false,
            Some(s) if s.is_folded() || s.is_all_in() => {
                self.pending.remove(&seat);
                false
            }
            Some(_) => true,
        }
    }

    fn auto_fold(&mut self, seat: usize, reason: &str) -> ActionOutcome {
        let player = &mut self.seats[seat];
        if !player.is_folded() {
            player.fold();
        }
        player.record_action(ActionKind::Fold, "Invalid -> Fold".into());
        let _ = player.take_pending_invalid_reason();
        tracing::warn!(seat = %player.name(), reason, "forcing fold");
        let note = format!(
            "{}: invalid action - {}. Automatic fold applied.",
            player.name(),
            reason
        );
        self.pending.remove(&seat);
        self.set_note(note);
        ActionOutcome::AutoFolded {
            reason: reason.to_string(),
        }
    }

    fn prune_pending(&mut self) {
        let seats = &self.seats;
        self.pending
            .retain(|&i| seats.get(i).is_some_and(|s| s.can_act()));
    }

    /// True once at most one seat is left in the hand or nobody owes an action.
    pub fn should_advance_phase(&self) -> bool {
        self.non_folded_count() <= 1 || self.pending.is_empty()
    }

    /// Deals the next street, or moves from the river to showdown and
    /// scores the remaining hands.
    pub fn advance_phase(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Preflop => {
                self.deal_community(3)?;
                self.phase = Phase::Flop;
            }
            Phase::Flop => {
                self.deal_community(1)?;
                self.phase = Phase::Turn;
            }
            Phase::Turn => {
                self.deal_community(1)?;
                self.phase = Phase::River;
            }
            Phase::River => {
                self.phase = Phase::Showdown;
                showdown::determine_winners(self);
            }
            Phase::Showdown => return Ok(()),
        }

        if self.phase != Phase::Showdown {
            self.current_bet = 0;
            for seat in self.seats.iter_mut().filter(|s| !s.is_folded()) {
                seat.reset_round_bet();
            }
            self.open_betting_round();
        }
        tracing::info!(hand = self.hand_count, phase = %self.phase, pot = self.pot, "phase advanced");
        Ok(())
    }

    fn deal_community(&mut self, count: usize) -> Result<(), GameError> {
        for _ in 0..count {
            let card = self.deck.draw()?;
            self.community.push(card);
        }
        Ok(())
    }

    /// Moves `current_player` to the next seat, in seat order, that can act
    /// and still owes an action. Leaves it unchanged when there is none.
    pub fn next_player(&mut self) {
        let n = self.seats.len();
        let start = self.current_player;
        for offset in 1..=n {
            let candidate = (start + offset) % n;
            if !self.seats[candidate].can_act() {
                continue;
            }
            if !self.pending.is_empty() && !self.pending.contains(&candidate) {
                continue;
            }
            self.current_player = candidate;
            return;
        }
    }
}
