//! # pokerarena-engine: Multi-seat No-Limit Tournament Core
//!
//! A deterministic no-limit hold'em tournament engine for two or more seats,
//! each played by a pluggable strategy. Chips are conserved across the whole
//! tournament, illegal actions never abort play, and every hand can be
//! replayed from its seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seeded ChaCha20 deck, reshuffled every hand
//! - [`hand`] - Best-five-of-seven evaluation and descriptions
//! - [`player`] - Seat state and the actions applied to it
//! - [`rules`] - Action and strategy-request validation
//! - [`game`] - Betting state machine (phases, pending seats, forced folds)
//! - [`showdown`] - Winner selection, pot splitting, elimination
//! - [`agent`] - Strategy trait and decision protocol
//! - [`engine`] - One-step-at-a-time tournament orchestrator
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`config`] - Table configuration
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerarena_engine::cards::parse_cards;
//! use pokerarena_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let value = evaluate_hand(&cards);
//! assert_eq!(value.category, Category::RoyalFlush);
//! assert_eq!(value.describe(), "Royal Flush");
//! ```
//!
//! ## Driving a Table by Hand
//!
//! ```rust
//! use pokerarena_engine::config::TableConfig;
//! use pokerarena_engine::game::{GameState, Phase};
//! use pokerarena_engine::player::PlayerAction;
//!
//! let cfg = TableConfig { seed: Some(42), ..TableConfig::default() };
//! let mut gs = GameState::new(&cfg, &["Ann", "Bob"]).unwrap();
//! gs.start_hand().unwrap();
//!
//! let first = gs.current_player();
//! gs.apply_action(first, PlayerAction::Raise(10));
//! gs.next_player();
//! gs.apply_action(gs.current_player(), PlayerAction::Call);
//!
//! assert!(gs.should_advance_phase());
//! gs.advance_phase().unwrap();
//! assert_eq!(gs.phase(), Phase::Flop);
//! assert_eq!(gs.pot(), 20);
//! ```

pub mod agent;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod showdown;
