//! Paced console driver for a single tournament.
//!
//! Steps the orchestrator once per tick, drains the engine note after every
//! step and reprints the table whenever something visible changed. The pace
//! comes from `move_interval_ms`; zero runs flat out.

use crate::commands::{build_engine, effective_seed, MAX_STEPS};
use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use pokerarena_engine::engine::{Engine, Step, TournamentOutcome};
use std::io::Write;
use std::time::Duration;

pub fn handle_play_command(
    config: &Config,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = effective_seed(config);
    let mut engine = build_engine(config, seed)?;
    let pause = Duration::from_millis(config.move_interval_ms);

    writeln!(
        out,
        "Tournament: {} seats, ${} each, seed {}",
        config.seats.len(),
        config.starting_chips,
        seed
    )?;

    let mut steps = 0usize;
    while !engine.is_finished() {
        if steps >= MAX_STEPS {
            return Err(CliError::Engine(format!(
                "tournament did not finish within {} steps",
                MAX_STEPS
            )));
        }
        let step = engine.step()?;
        steps += 1;

        if let Some(note) = engine.pop_last_note() {
            ui::write_note(out, &note)?;
        }
        if matches!(step, Step::SeatSkipped(_) | Step::Finished) {
            continue;
        }
        if !quiet {
            write!(out, "{}", ui::render_table(engine.state()))?;
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }

    write_standings(&engine, out)
}

fn write_standings(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let state = engine.state();
    match engine.outcome() {
        Some(TournamentOutcome::Champion(seat)) => {
            let name = state.seat(*seat).map(|s| s.name()).unwrap_or_default();
            writeln!(
                out,
                "Champion: {} after {} hands",
                name,
                state.hand_count()
            )?;
        }
        Some(TournamentOutcome::HandLimit { leaders, chips }) => {
            let names: Vec<&str> = leaders
                .iter()
                .filter_map(|&i| state.seat(i).map(|s| s.name()))
                .collect();
            writeln!(
                out,
                "Hand limit: {} lead with ${} after {} hands",
                names.join(", "),
                chips,
                state.hand_count()
            )?;
        }
        None => {}
    }

    let mut order: Vec<usize> = (0..state.seats().len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(state.seats()[i].chips()));
    writeln!(out, "Final standings:")?;
    for (place, i) in order.into_iter().enumerate() {
        let seat = &state.seats()[i];
        writeln!(out, "  {}. {} ${}", place + 1, seat.name(), seat.chips())?;
    }
    Ok(())
}
