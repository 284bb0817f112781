//! Winner selection, pot distribution and elimination.

use crate::game::GameState;
use crate::hand::evaluate_hand;

/// Label given to the only seat left when everyone else folded.
pub const LAST_PLAYER_STANDING: &str = "Last Player Standing";

/// Result of distributing the pot at the end of a hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Award {
    /// Pot size before distribution
    pub pot: u32,
    /// `(seat, chips)` per winner, in seat order
    pub shares: Vec<(usize, u32)>,
    /// Seats eliminated by this hand
    pub eliminated: Vec<usize>,
    /// Set when one seat now holds every chip
    pub champion: Option<usize>,
}

/// Scores every non-folded seat and returns the winners in seat order.
///
/// Each scored seat gets its best hand and a description. A lone survivor
/// wins without evaluation.
pub fn determine_winners(state: &mut GameState) -> Vec<usize> {
    for seat in &mut state.seats {
        seat.clear_best_hand();
    }

    let active: Vec<usize> = (0..state.seats.len())
        .filter(|&i| !state.seats[i].is_folded())
        .collect();

    if active.len() == 1 {
        let winner = active[0];
        state.seats[winner].set_best_hand(None, LAST_PLAYER_STANDING.to_string());
        return active;
    }

    let mut scored = Vec::with_capacity(active.len());
    for i in active {
        let mut cards = state.seats[i].hole_cards().to_vec();
        cards.extend_from_slice(&state.community);
        let value = evaluate_hand(&cards);
        let name = value.describe();
        state.seats[i].set_best_hand(Some(value.clone()), name);
        scored.push((i, value));
    }

    // stable: tied seats keep seat order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    let Some(best) = scored.first().map(|(_, v)| v.clone()) else {
        return Vec::new();
    };
    let mut winners: Vec<usize> = scored
        .into_iter()
        .take_while(|(_, v)| *v == best)
        .map(|(i, _)| i)
        .collect();
    winners.sort_unstable();
    winners
}

/// Splits the pot among `winners`, eliminates broke seats and detects a
/// tournament champion.
///
/// The remainder of an uneven split goes one chip at a time to the
/// earliest winners in seat order.
pub fn award_pot(state: &mut GameState, winners: &[usize]) -> Award {
    let mut winners: Vec<usize> = winners
        .iter()
        .copied()
        .filter(|&i| i < state.seats.len())
        .collect();
    winners.sort_unstable();
    winners.dedup();
    if winners.is_empty() {
        return Award::default();
    }

    let pot = state.pot;
    let count = winners.len() as u32;
    let share = pot / count;
    let remainder = (pot % count) as usize;

    let mut shares = Vec::with_capacity(winners.len());
    for (n, &seat) in winners.iter().enumerate() {
        let amount = share + u32::from(n < remainder);
        state.seats[seat].add_chips(amount);
        shares.push((seat, amount));
        tracing::info!(
            hand = state.hand_count,
            seat = %state.seats[seat].name(),
            amount,
            "pot share awarded"
        );
    }
    state.pot = 0;
    state.pending.clear();

    let mut eliminated = Vec::new();
    for (i, seat) in state.seats.iter_mut().enumerate() {
        let won = winners.contains(&i);
        if won && seat.chips() > 0 {
            seat.reinstate();
        } else if !won && seat.chips() == 0 && !seat.is_eliminated() {
            seat.eliminate();
            eliminated.push(i);
            tracing::info!(seat = %seat.name(), "seat eliminated");
        }
    }

    let champion = champion(state);
    if let Some(c) = champion {
        let msg = format!("{} wins the tournament!", state.seats[c].name());
        tracing::info!(seat = %state.seats[c].name(), "tournament won");
        state.set_note(msg);
    }

    Award {
        pot,
        shares,
        eliminated,
        champion,
    }
}

/// The seat holding every chip in play while all others are eliminated.
pub fn champion(state: &GameState) -> Option<usize> {
    let total: u64 = state.seats.iter().map(|s| s.chips() as u64).sum();
    if total == 0 {
        return None;
    }
    let holder = state
        .seats
        .iter()
        .position(|s| s.chips() as u64 == total)?;
    let others_out = state
        .seats
        .iter()
        .enumerate()
        .all(|(i, s)| i == holder || s.is_eliminated());
    others_out.then_some(holder)
}
