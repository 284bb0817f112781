//! Deal command handler.
//!
//! Deals one hand to the configured seats, runs the board out to the river
//! without any betting and scores every hand.

use crate::commands::{effective_seed, seat_names};
use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use pokerarena_engine::game::{GameState, Phase};
use pokerarena_engine::showdown::determine_winners;
use std::io::Write;

pub fn handle_deal_command(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let mut table = config.table_config();
    table.seed = Some(effective_seed(config));
    let mut state = GameState::new(&table, &seat_names(&config.seats))?;

    state.start_hand()?;
    while state.phase() != Phase::Showdown {
        state.advance_phase()?;
    }
    let winners = determine_winners(&mut state);

    for seat in state.seats() {
        writeln!(
            out,
            "{}: {} ({})",
            seat.name(),
            ui::format_cards(seat.hole_cards()),
            seat.best_hand_name().unwrap_or("No Hand")
        )?;
    }
    writeln!(out, "Board: {}", ui::format_cards(state.community_cards()))?;
    let names: Vec<&str> = winners
        .iter()
        .filter_map(|&i| state.seat(i).map(|s| s.name()))
        .collect();
    writeln!(out, "Winners: {}", names.join(", "))?;
    Ok(())
}
