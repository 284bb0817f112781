//! Batch tournament simulator.
//!
//! Runs `tournaments` tournaments back to back without pacing. Tournament
//! `i` uses seed `base + i`, so a base seed reproduces the whole batch.
//! Hand histories can be written as JSON Lines.

use crate::commands::{build_engine, effective_seed, seat_names, MAX_STEPS};
use crate::config::Config;
use crate::error::CliError;
use pokerarena_engine::engine::TournamentOutcome;
use pokerarena_engine::logger::HandLogger;
use std::io::Write;

pub fn handle_sim_command(
    tournaments: u32,
    output: Option<String>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if tournaments == 0 {
        return Err(CliError::InvalidInput("tournaments must be >= 1".into()));
    }

    let base_seed = effective_seed(config);
    let names = seat_names(&config.seats);
    let mut logger = output.as_deref().map(HandLogger::create).transpose()?;

    let mut titles = vec![0u32; names.len()];
    let mut unfinished = 0u32;
    let mut total_hands = 0u64;

    writeln!(
        out,
        "Simulating {} tournaments with {} seats (base seed {})",
        tournaments,
        names.len(),
        base_seed
    )?;

    for i in 0..tournaments {
        let seed = base_seed.wrapping_add(i as u64);
        let mut engine = build_engine(config, seed)?;
        let outcome = engine.run_to_completion(MAX_STEPS)?;
        let hands = engine.state().hand_count();
        total_hands += hands as u64;

        if let Some(logger) = logger.as_mut() {
            for record in engine.take_hand_records() {
                logger.write(&record)?;
            }
        }

        match outcome {
            Some(TournamentOutcome::Champion(seat)) => {
                titles[seat] += 1;
                writeln!(
                    out,
                    "Tournament {} (seed {}): {} wins after {} hands",
                    i + 1,
                    seed,
                    names[seat],
                    hands
                )?;
            }
            Some(TournamentOutcome::HandLimit { leaders, chips }) => {
                unfinished += 1;
                let leading: Vec<&str> = leaders.iter().map(|&s| names[s].as_str()).collect();
                writeln!(
                    out,
                    "Tournament {} (seed {}): hand limit, {} lead with ${}",
                    i + 1,
                    seed,
                    leading.join(", "),
                    chips
                )?;
            }
            None => {
                return Err(CliError::Engine(format!(
                    "tournament {} did not finish within {} steps",
                    i + 1,
                    MAX_STEPS
                )));
            }
        }
    }

    writeln!(out, "Champions:")?;
    for (name, count) in names.iter().zip(&titles) {
        writeln!(out, "  {}: {}", name, count)?;
    }
    writeln!(out, "Hand-limit finishes: {}", unfinished)?;
    writeln!(out, "Hands played: {}", total_hands)?;
    if let Some(path) = output {
        writeln!(out, "Hand histories written to {}", path)?;
    }
    Ok(())
}
