//! UI helper functions for terminal output formatting.
//!
//! Rendering only reads the engine's public accessors; nothing here mutates
//! the table.

use pokerarena_engine::cards::Card;
use pokerarena_engine::game::GameState;
use pokerarena_engine::player::Seat;
use std::io::Write;

const RULE_WIDTH: usize = 60;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Engine notes are shouted so they stand out between table dumps.
pub fn write_note(out: &mut dyn Write, note: &str) -> std::io::Result<()> {
    writeln!(out, "!!! {}", note)
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Status flags in the order they are shown: folded, all-in, eliminated,
/// then the chips committed this round.
pub fn seat_status(seat: &Seat) -> String {
    let mut status = Vec::new();
    if seat.is_folded() {
        status.push("FOLDED".to_string());
    }
    if seat.is_all_in() {
        status.push("ALL IN".to_string());
    }
    if seat.is_eliminated() {
        status.push("ELIMINATED".to_string());
    }
    if seat.current_bet() > 0 {
        status.push(format!("BET: ${}", seat.current_bet()));
    }
    if status.is_empty() {
        String::new()
    } else {
        format!(" ({})", status.join(", "))
    }
}

pub fn render_table(state: &GameState) -> String {
    let mut lines = Vec::new();
    let rule = "=".repeat(RULE_WIDTH);
    lines.push(rule.clone());
    lines.push(format!("HAND #{}", state.hand_count()));
    lines.push(format!("POT: ${}", state.pot()));
    lines.push(format!("PHASE: {}", state.phase().to_string().to_uppercase()));
    if let Some(seat) = state.seat(state.current_player()) {
        lines.push(format!("CURRENT PLAYER: {}", seat.name()));
    }
    lines.push(rule);

    if state.community_cards().is_empty() {
        lines.push("COMMUNITY CARDS: None yet".to_string());
    } else {
        lines.push(format!(
            "COMMUNITY CARDS: {}",
            format_cards(state.community_cards())
        ));
    }

    lines.push(String::new());
    lines.push("PLAYERS:".to_string());
    for (i, seat) in state.seats().iter().enumerate() {
        let dealer = if state.dealer_position() == Some(i) {
            " [D]"
        } else {
            ""
        };
        lines.push(format!(
            "  {}. {}{}: ${} chips{}",
            i + 1,
            seat.name(),
            dealer,
            seat.chips(),
            seat_status(seat)
        ));
        if !seat.hole_cards().is_empty() && !seat.is_folded() {
            lines.push(format!("     Cards: {}", format_cards(seat.hole_cards())));
        }
        if let Some(best) = seat.best_hand_name() {
            lines.push(format!("     Best Hand: {}", best));
        }
        if let Some(label) = seat.last_action_label() {
            lines.push(format!("     Last Move: {}", label));
        }
    }
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
