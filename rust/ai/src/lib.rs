//! # pokerarena-ai: Built-in Tournament Strategies
//!
//! Concrete implementations of the engine's [`Strategy`] capability and a
//! factory that builds them by name.
//!
//! ## Core Components
//!
//! - [`simple`] - Rule-of-thumb strategies (shove, copycat, passive, ...)
//! - [`random`] - Weighted random actions
//! - [`baseline`] - Hand-strength heuristic built on the evaluator
//! - [`create_strategy`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerarena_ai::{create_strategy, STRATEGY_NAMES};
//! use pokerarena_engine::config::TableConfig;
//! use pokerarena_engine::engine::Engine;
//!
//! let strategies = STRATEGY_NAMES
//!     .iter()
//!     .enumerate()
//!     .map(|(i, name)| create_strategy(name, i as u64))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let cfg = TableConfig { seed: Some(42), max_hands: Some(20), ..TableConfig::default() };
//! let mut engine = Engine::new(cfg, strategies).unwrap();
//! let outcome = engine.run_to_completion(100_000).unwrap();
//! assert!(outcome.is_some());
//! ```

use pokerarena_engine::agent::Strategy;
use thiserror::Error;

pub mod baseline;
pub mod random;
pub mod simple;

/// Every name [`create_strategy`] accepts, in default seating order.
pub const STRATEGY_NAMES: [&str; 8] = [
    "shove",
    "copycat",
    "passive",
    "ace-lover",
    "pushover",
    "cautious",
    "random",
    "baseline",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown strategy '{0}' (expected one of: {list})", list = STRATEGY_NAMES.join(", "))]
pub struct UnknownStrategy(pub String);

/// Builds a strategy by name. `seed` feeds strategies that use randomness.
///
/// # Errors
///
/// [`UnknownStrategy`] for a name outside [`STRATEGY_NAMES`].
///
/// # Example
///
/// ```rust
/// use pokerarena_ai::create_strategy;
///
/// let s = create_strategy("passive", 0).unwrap();
/// assert_eq!(s.name(), "passive");
/// assert!(create_strategy("telepath", 0).is_err());
/// ```
pub fn create_strategy(name: &str, seed: u64) -> Result<Box<dyn Strategy>, UnknownStrategy> {
    let strategy: Box<dyn Strategy> = match name.trim().to_ascii_lowercase().as_str() {
        "shove" => Box::new(simple::Shove),
        "copycat" => Box::new(simple::Copycat),
        "passive" => Box::new(simple::Passive),
        "ace-lover" => Box::new(simple::AceLover::new(seed)),
        "pushover" => Box::new(simple::Pushover),
        "cautious" => Box::new(simple::Cautious),
        "random" => Box::new(random::RandomStrategy::new(seed)),
        "baseline" => Box::new(baseline::Baseline::new()),
        _ => return Err(UnknownStrategy(name.to_string())),
    };
    Ok(strategy)
}
