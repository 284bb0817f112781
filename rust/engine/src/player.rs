use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::HandValue;

/// An action the betting state machine applies to a seat.
/// Raise carries the amount added on top of the call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the table's current bet
    Call,
    /// Call, then add the given amount
    Raise(u32),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call => ActionKind::Call,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }
}

/// Last move a seat made, as shown to the other seats' strategies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    Eliminated,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
            ActionKind::Eliminated => "eliminated",
        }
    }
}

/// A tournament seat: stack, hole cards and per-hand betting state.
///
/// A folded seat holds no hole cards, and `all_in` is only ever set when
/// the stack reaches zero.
#[derive(Debug, Clone, Serialize)]
pub struct Seat {
    name: String,
    chips: u32,
    hole: Vec<Card>,
    /// Chips committed in the current betting round
    current_bet: u32,
    /// Chips committed in the whole hand
    total_bet: u32,
    folded: bool,
    all_in: bool,
    eliminated: bool,
    last_action: Option<ActionKind>,
    last_action_label: Option<String>,
    pending_invalid_reason: Option<String>,
    best_hand: Option<HandValue>,
    best_hand_name: Option<String>,
}

impl Seat {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            hole: Vec::with_capacity(2),
            current_bet: 0,
            total_bet: 0,
            folded: false,
            all_in: false,
            eliminated: false,
            last_action: None,
            last_action_label: None,
            pending_invalid_reason: None,
            best_hand: None,
            best_hand_name: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }
    pub fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }
    pub fn last_action_label(&self) -> Option<&str> {
        self.last_action_label.as_deref()
    }
    pub fn best_hand(&self) -> Option<&HandValue> {
        self.best_hand.as_ref()
    }
    pub fn best_hand_name(&self) -> Option<&str> {
        self.best_hand_name.as_deref()
    }

    /// Not folded, not all-in, holding chips and still in the tournament.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && self.chips > 0 && !self.eliminated
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::HoleCardsFull);
        }
        self.hole.push(c);
        Ok(())
    }

    pub fn fold(&mut self) {
        self.folded = true;
        self.hole.clear();
    }

    /// Moves chips from the stack into this seat's commitment. The caller
    /// credits the pot by the same amount.
    pub fn bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        self.current_bet += amount;
        self.total_bet += amount;
        if self.chips == 0 {
            self.all_in = true;
        }
        Ok(())
    }

    /// Clears everything hand-scoped. Elimination persists across hands.
    pub fn reset_for_new_hand(&mut self) {
        self.current_bet = 0;
        self.total_bet = 0;
        self.folded = false;
        self.all_in = false;
        self.hole.clear();
        self.last_action = None;
        self.last_action_label = None;
        self.pending_invalid_reason = None;
        self.clear_best_hand();
    }

    pub(crate) fn sit_out(&mut self) {
        self.folded = true;
        self.hole.clear();
        self.pending_invalid_reason = None;
        self.clear_best_hand();
        if self.eliminated {
            self.last_action = Some(ActionKind::Eliminated);
            self.last_action_label = Some("Eliminated".to_string());
        }
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
        self.folded = true;
        self.last_action_label = Some("Eliminated".to_string());
    }

    pub(crate) fn reinstate(&mut self) {
        self.eliminated = false;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub(crate) fn reset_round_bet(&mut self) {
        self.current_bet = 0;
    }

    pub(crate) fn record_action(&mut self, kind: ActionKind, label: String) {
        self.last_action = Some(kind);
        self.last_action_label = Some(label);
    }

    pub(crate) fn set_pending_invalid_reason(&mut self, reason: String) {
        self.pending_invalid_reason = Some(reason);
    }

    pub(crate) fn take_pending_invalid_reason(&mut self) -> Option<String> {
        self.pending_invalid_reason.take()
    }

    pub(crate) fn set_best_hand(&mut self, value: Option<HandValue>, name: String) {
        self.best_hand = value;
        self.best_hand_name = Some(name);
    }

    pub(crate) fn clear_best_hand(&mut self) {
        self.best_hand = None;
        self.best_hand_name = None;
    }
}
