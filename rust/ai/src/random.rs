use pokerarena_engine::agent::{Decision, Strategy, StrategyError, TurnContext};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest raise the random strategy will make.
const RAISE_CAP: u32 = 25;

/// Picks fold 10% of the time and call, check or raise 30% each. Raises
/// are between 1 and 25 chips, never more than the stack allows.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn call_or_check(ctx: &TurnContext) -> Decision {
        if ctx.call_required > 0 && ctx.me.chips > 0 {
            Decision::call(ctx.call_required.min(ctx.me.chips))
        } else {
            Decision::check()
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        let owed = ctx.call_required;
        let chips = ctx.me.chips;
        let roll = self.rng.random_range(0..10u8);

        let decision = match roll {
            0 => Decision::fold(),
            1..=3 => {
                if owed == 0 {
                    Decision::check()
                } else {
                    Decision::call(owed.min(chips))
                }
            }
            4..=6 => Decision::check(),
            _ => {
                let headroom = chips.saturating_sub(owed);
                if headroom == 0 {
                    return Ok(Self::call_or_check(ctx));
                }
                let cap = RAISE_CAP.min(headroom);
                let floor = cap.min(5).max(1);
                Decision::raise(self.rng.random_range(floor..=cap))
            }
        };
        tracing::trace!(roll, %decision, "random strategy");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerarena_engine::agent::{SeatMove, SelfView};
    use pokerarena_engine::game::Phase;

    fn ctx(chips: u32, owed: u32) -> TurnContext {
        TurnContext {
            me: SelfView {
                name: "r".into(),
                chips,
                hole_cards: Vec::new(),
                current_bet: 0,
                total_bet: 0,
                all_in: false,
            },
            community_cards: Vec::new(),
            pot: 0,
            current_bet: owed,
            call_required: owed,
            phase: Phase::Flop,
            other_moves: Vec::new(),
            previous_move: SeatMove {
                name: "p".into(),
                last_action: None,
            },
        }
    }

    #[test]
    fn raises_stay_within_cap_and_stack() {
        let mut r = RandomStrategy::new(11);
        for _ in 0..500 {
            if let Decision::WithAmount(name, amount) = r.decide(&ctx(40, 10)).unwrap() {
                if name == "raise" {
                    assert!((5..=25).contains(&amount), "{amount}");
                }
            }
            if let Decision::WithAmount(name, amount) = r.decide(&ctx(13, 10)).unwrap() {
                if name == "raise" {
                    assert!((1..=3).contains(&amount), "{amount}");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = RandomStrategy::new(7);
        let mut b = RandomStrategy::new(7);
        for _ in 0..50 {
            assert_eq!(a.decide(&ctx(100, 5)), b.decide(&ctx(100, 5)));
        }
    }
}
