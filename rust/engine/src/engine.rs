//! Tournament orchestrator.
//!
//! [`Engine`] pairs a [`GameState`] with one [`Strategy`] per seat and
//! advances the tournament one unit of work per [`Engine::step`]. It never
//! sleeps or spawns threads, so a driver can step it on a timer, by hand,
//! or in a tight loop.

use crate::agent::{request_action, Strategy};
use crate::config::TableConfig;
use crate::errors::GameError;
use crate::game::{ActionOutcome, GameState, Phase};
use crate::logger::{ActionRecord, HandRecord, ShowdownInfo};
use crate::player::PlayerAction;
use crate::showdown::{award_pot, determine_winners, Award};

/// How the tournament ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentOutcome {
    /// One seat holds every chip
    Champion(usize),
    /// The hand limit was hit; every seat tied for the most chips
    HandLimit { leaders: Vec<usize>, chips: u32 },
}

/// The single unit of work a call to [`Engine::step`] performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    HandStarted(u32),
    ShowdownResolved(Award),
    PhaseAdvanced(Phase),
    SeatSkipped(usize),
    Acted {
        seat: usize,
        action: PlayerAction,
        outcome: ActionOutcome,
    },
    TournamentOver(TournamentOutcome),
    /// Nothing left to do
    Finished,
}

pub struct Engine {
    state: GameState,
    strategies: Vec<Box<dyn Strategy>>,
    config: TableConfig,
    new_hand_requested: bool,
    outcome: Option<TournamentOutcome>,
    current_record: Option<HandRecord>,
    completed: Vec<HandRecord>,
}

impl Engine {
    /// Seats one player per strategy, named after it, with the configured stack.
    pub fn new(config: TableConfig, strategies: Vec<Box<dyn Strategy>>) -> Result<Self, GameError> {
        let names: Vec<String> = strategies.iter().map(|s| s.name().to_string()).collect();
        let state = GameState::new(&config, &names)?;
        Self::with_state(config, state, strategies)
    }

    /// Drives a prepared table; `strategies[i]` plays seat `i`.
    pub fn with_state(
        config: TableConfig,
        state: GameState,
        strategies: Vec<Box<dyn Strategy>>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if strategies.len() != state.seats().len() {
            return Err(GameError::InvalidConfig(format!(
                "{} strategies for {} seats",
                strategies.len(),
                state.seats().len()
            )));
        }
        Ok(Self {
            state,
            strategies,
            config,
            new_hand_requested: true,
            outcome: None,
            current_record: None,
            completed: Vec::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn outcome(&self) -> Option<&TournamentOutcome> {
        self.outcome.as_ref()
    }
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drains the latest engine note.
    pub fn pop_last_note(&mut self) -> Option<String> {
        self.state.pop_last_note()
    }

    /// Histories of hands finished since the last call.
    pub fn take_hand_records(&mut self) -> Vec<HandRecord> {
        std::mem::take(&mut self.completed)
    }

    /// Performs exactly one unit of work. Only deck exhaustion is an error;
    /// strategy misbehaviour is absorbed as forced folds.
    pub fn step(&mut self) -> Result<Step, GameError> {
        if self.outcome.is_some() {
            return Ok(Step::Finished);
        }

        if self.new_hand_requested {
            if let Some(limit) = self.config.max_hands {
                if self.state.hand_count() >= limit {
                    return Ok(self.end_at_hand_limit());
                }
            }
            self.state.start_hand()?;
            self.new_hand_requested = false;
            self.current_record = Some(HandRecord {
                hand_id: String::new(),
                hand_number: self.state.hand_count(),
                seed: self.config.seed,
                actions: Vec::new(),
                board: Vec::new(),
                showdown: None,
                result: None,
                ts: None,
            });
            return Ok(Step::HandStarted(self.state.hand_count()));
        }

        let alive: Vec<usize> = (0..self.state.seats().len())
            .filter(|&i| !self.state.seats()[i].is_eliminated())
            .collect();
        if alive.len() <= 1 {
            if let Some(&last) = alive.first() {
                let outcome = TournamentOutcome::Champion(last);
                self.outcome = Some(outcome.clone());
                self.state.pending.clear();
                let name = self.state.seats()[last].name().to_string();
                tracing::info!(seat = %name, "tournament over");
                self.state.set_note(format!("{} wins the tournament!", name));
                return Ok(Step::TournamentOver(outcome));
            }
        }

        if self.state.phase() == Phase::Showdown {
            return Ok(self.resolve_showdown());
        }

        if self.state.should_advance_phase() {
            self.state.advance_phase()?;
            return Ok(Step::PhaseAdvanced(self.state.phase()));
        }

        let seat = self.state.current_player();
        let pending = self.state.pending_players();
        if !self.state.seats()[seat].can_act() || (!pending.is_empty() && !pending.contains(&seat))
        {
            self.state.next_player();
            return Ok(Step::SeatSkipped(seat));
        }

        let action = request_action(&mut self.state, seat, self.strategies[seat].as_mut());
        let outcome = self.state.apply_action(seat, action);
        if outcome != ActionOutcome::Ignored {
            self.record_action(seat, action);
            self.state.next_player();
        }
        Ok(Step::Acted {
            seat,
            action,
            outcome,
        })
    }

    /// Steps until the tournament ends or `max_steps` is used up.
    pub fn run_to_completion(&mut self, max_steps: usize) -> Result<Option<TournamentOutcome>, GameError> {
        for _ in 0..max_steps {
            if self.outcome.is_some() {
                break;
            }
            self.step()?;
        }
        Ok(self.outcome.clone())
    }

    fn record_action(&mut self, seat: usize, action: PlayerAction) {
        let Some(record) = self.current_record.as_mut() else {
            return;
        };
        let s = &self.state.seats()[seat];
        record.actions.push(ActionRecord {
            seat,
            name: s.name().to_string(),
            phase: self.state.phase(),
            action,
            label: s.last_action_label().unwrap_or_default().to_string(),
        });
    }

    fn resolve_showdown(&mut self) -> Step {
        let winners = determine_winners(&mut self.state);
        let pot = self.state.pot();
        let names: Vec<&str> = winners
            .iter()
            .map(|&i| self.state.seats()[i].name())
            .collect();
        let summary = format!("Winners: {} win ${}", names.join(", "), pot);
        let hands: Vec<String> = winners
            .iter()
            .map(|&i| {
                self.state.seats()[i]
                    .best_hand_name()
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        tracing::info!(hand = self.state.hand_count(), pot, winners = %names.join(", "), "showdown");
        self.state.set_note(summary.clone());

        let award = award_pot(&mut self.state, &winners);
        self.new_hand_requested = true;

        if let Some(mut record) = self.current_record.take() {
            record.board = self.state.community_cards().to_vec();
            record.showdown = Some(ShowdownInfo {
                winners: winners.clone(),
                pot,
                hands,
            });
            record.result = Some(summary);
            self.completed.push(record);
        }

        if let Some(champion) = award.champion {
            self.outcome = Some(TournamentOutcome::Champion(champion));
        }
        Step::ShowdownResolved(award)
    }

    fn end_at_hand_limit(&mut self) -> Step {
        let chips = self
            .state
            .seats()
            .iter()
            .map(|s| s.chips())
            .max()
            .unwrap_or(0);
        let leaders: Vec<usize> = (0..self.state.seats().len())
            .filter(|&i| self.state.seats()[i].chips() == chips)
            .collect();
        let names: Vec<&str> = leaders
            .iter()
            .map(|&i| self.state.seats()[i].name())
            .collect();
        let note = if names.len() == 1 {
            format!("Hand limit reached. {} wins with ${} in chips.", names[0], chips)
        } else {
            format!(
                "Hand limit reached. {} tie for the lead with ${} each.",
                names.join(", "),
                chips
            )
        };
        tracing::info!(hands = self.state.hand_count(), leaders = %names.join(", "), chips, "hand limit reached");
        self.state.set_note(note);
        self.state.pending.clear();
        self.new_hand_requested = false;

        let outcome = TournamentOutcome::HandLimit { leaders, chips };
        self.outcome = Some(outcome.clone());
        Step::TournamentOver(outcome)
    }
}
