//! Command handler modules for the pokerarena CLI.
//!
//! Each command lives in its own file and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never `println!`
//! - Errors propagated via [`CliError`]

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config::Config;
use crate::error::CliError;
use pokerarena_ai::create_strategy;
use pokerarena_engine::agent::Strategy;
use pokerarena_engine::engine::Engine;
use pokerarena_engine::game::GameState;

/// Upper bound on orchestrator steps for a single tournament.
pub const MAX_STEPS: usize = 2_000_000;

/// Seat names for a line-up. Repeated strategies get a `#n` suffix so
/// notes stay unambiguous.
pub fn seat_names(seats: &[String]) -> Vec<String> {
    seats
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.trim().to_ascii_lowercase();
            let repeats = seats
                .iter()
                .filter(|s| s.trim().eq_ignore_ascii_case(&name))
                .count();
            if repeats > 1 {
                let nth = seats[..=i]
                    .iter()
                    .filter(|s| s.trim().eq_ignore_ascii_case(&name))
                    .count();
                format!("{} #{}", name, nth)
            } else {
                name
            }
        })
        .collect()
}

/// The seed a run actually uses: the configured one or a fresh draw.
pub fn effective_seed(config: &Config) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Seats the configured line-up; seat `i` seeds its strategy with `seed + i`.
pub fn build_engine(config: &Config, seed: u64) -> Result<Engine, CliError> {
    let mut table = config.table_config();
    table.seed = Some(seed);

    let strategies = config
        .seats
        .iter()
        .enumerate()
        .map(|(i, name)| create_strategy(name, seed.wrapping_add(i as u64)))
        .collect::<Result<Vec<Box<dyn Strategy>>, _>>()?;
    let state = GameState::new(&table, &seat_names(&config.seats))?;
    Ok(Engine::with_state(table, state, strategies)?)
}
