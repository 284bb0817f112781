//! Hand-strength heuristic strategy.
//!
//! Rates the hand on a 0-10 scale (a preflop chart before the flop, the
//! evaluator afterwards) and combines it with pot odds. Fully
//! deterministic, which makes it a stable reference opponent.

use pokerarena_engine::agent::{Decision, Strategy, StrategyError, TurnContext};
use pokerarena_engine::cards::Card;
use pokerarena_engine::game::Phase;
use pokerarena_engine::hand::{evaluate_hand, Category};

/// Deterministic rule-based strategy.
///
/// **Preflop:** premium pairs and big aces raise, medium hands call cheap
/// bets, weak hands check or fold.
///
/// **Postflop:** two pair or better bets for value, a pair calls small
/// bets, anything else folds to pressure unless the pot odds are generous.
///
/// # Example
///
/// ```rust
/// use pokerarena_ai::baseline::Baseline;
/// use pokerarena_engine::agent::Strategy;
///
/// let ai = Baseline::new();
/// assert_eq!(ai.name(), "baseline");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Baseline;

impl Baseline {
    pub fn new() -> Self {
        Self
    }

    /// 9-10 premium, 7-8 strong, 5-6 medium, 3-4 marginal, 0-2 weak.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let (r1, r2) = (hole[0].value(), hole[1].value());
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ => {
                if suited && high - low <= 2 {
                    if high >= 9 { 5 } else { 4 }
                } else if high >= 11 && low >= 9 {
                    4
                } else {
                    2
                }
            }
        }
    }

    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let value = evaluate_hand(&cards);

        let base: u8 = match value.category {
            Category::NoHand => 0,
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let kicker_boost = u8::from(value.tiebreak.first().is_some_and(|&v| v >= 12));
        Some((base + kicker_boost).min(10))
    }

    /// pot / (pot + call); 1.0 when nothing is owed.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn choose(strength: u8, to_call: u32, min_raise: u32, stack: u32, pot: u32) -> Decision {
        if to_call == 0 {
            return Self::choose_unopened(strength, min_raise, stack, pot);
        }
        if to_call >= stack {
            return if strength >= 7 && to_call == stack {
                Decision::all_in()
            } else {
                Decision::fold()
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                if stack >= to_call + min_raise {
                    let raise = (pot / 2).max(min_raise).min(stack - to_call);
                    if raise >= min_raise {
                        return Decision::raise(raise);
                    }
                }
                Decision::call(to_call)
            }
            7..=8 => Decision::call(to_call),
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => Decision::call(to_call),
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => Decision::call(to_call),
            _ => Decision::fold(),
        }
    }

    fn choose_unopened(strength: u8, min_raise: u32, stack: u32, pot: u32) -> Decision {
        if stack < min_raise {
            return Decision::check();
        }
        match strength {
            9..=10 => Decision::raise((pot * 2 / 3).max(min_raise).min(stack)),
            7..=8 => Decision::raise((pot / 2).max(min_raise).min(stack)),
            _ => Decision::check(),
        }
    }
}

impl Strategy for Baseline {
    fn name(&self) -> &str {
        "baseline"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        let to_call = ctx.call_required;
        let hole = match ctx.me.hole_cards.as_slice() {
            [a, b] => [*a, *b],
            _ => {
                return Ok(if to_call == 0 {
                    Decision::check()
                } else {
                    Decision::fold()
                });
            }
        };

        let strength = if ctx.phase == Phase::Preflop {
            Self::preflop_strength(hole)
        } else {
            Self::postflop_strength(hole, &ctx.community_cards)
                .unwrap_or_else(|| Self::preflop_strength(hole))
        };
        let min_raise = ctx.current_bet.max(1);
        Ok(Self::choose(strength, to_call, min_raise, ctx.me.chips, ctx.pot))
    }
}
