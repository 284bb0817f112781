//! Rule-of-thumb strategies. Each one reads only its own stack, the amount
//! owed and, for the copycat, the previous seat's last move.

use pokerarena_engine::agent::{Decision, Strategy, StrategyError, TurnContext};
use pokerarena_engine::cards::Rank;
use pokerarena_engine::player::ActionKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Call what is owed if affordable, otherwise fold.
fn call_or_fold(ctx: &TurnContext) -> Decision {
    if ctx.call_required <= ctx.me.chips {
        Decision::call(ctx.call_required)
    } else {
        Decision::fold()
    }
}

fn check_or_fold(ctx: &TurnContext) -> Decision {
    if ctx.call_required == 0 {
        Decision::check()
    } else {
        Decision::fold()
    }
}

/// Puts the whole stack in every time.
#[derive(Debug, Clone, Default)]
pub struct Shove;

impl Strategy for Shove {
    fn name(&self) -> &str {
        "shove"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        let chips = ctx.me.chips;
        if chips == 0 {
            return Ok(check_or_fold(ctx));
        }
        if ctx.call_required >= chips {
            return Ok(Decision::call(chips));
        }
        Ok(Decision::raise((chips - ctx.call_required).max(1)))
    }
}

/// Mirrors whatever the previous seat did last.
#[derive(Debug, Clone, Default)]
pub struct Copycat;

impl Strategy for Copycat {
    fn name(&self) -> &str {
        "copycat"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        let chips = ctx.me.chips;
        let owed = ctx.call_required;
        let decision = match ctx.previous_move.last_action {
            None => check_or_fold(ctx),
            Some(ActionKind::Fold) => Decision::fold(),
            Some(ActionKind::Check) => check_or_fold(ctx),
            Some(ActionKind::Call) => call_or_fold(ctx),
            Some(ActionKind::Raise) => {
                if chips <= owed {
                    Decision::fold()
                } else {
                    // match the wager size, at least one chip
                    let additional = if owed > 0 { owed } else { 1 };
                    Decision::raise(additional.min(chips - owed))
                }
            }
            Some(ActionKind::Eliminated) => {
                if owed == 0 {
                    Decision::check()
                } else {
                    call_or_fold(ctx)
                }
            }
        };
        Ok(decision)
    }
}

/// Checks whenever possible, calls when it has to.
#[derive(Debug, Clone, Default)]
pub struct Passive;

impl Strategy for Passive {
    fn name(&self) -> &str {
        "passive"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        if ctx.call_required == 0 {
            return Ok(Decision::check());
        }
        Ok(call_or_fold(ctx))
    }
}

/// All-in holding an ace; otherwise checks, or flips a coin between
/// calling and folding.
#[derive(Debug, Clone)]
pub struct AceLover {
    rng: StdRng,
}

impl AceLover {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for AceLover {
    fn name(&self) -> &str {
        "ace-lover"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        let has_ace = ctx.me.hole_cards.iter().any(|c| c.rank == Rank::Ace);
        if has_ace && ctx.me.chips > 0 {
            return Ok(Decision::all_in());
        }
        if ctx.call_required == 0 {
            return Ok(Decision::check());
        }
        if self.rng.random_bool(0.5) {
            return Ok(call_or_fold(ctx));
        }
        Ok(Decision::fold())
    }
}

/// Folds every hand.
#[derive(Debug, Clone, Default)]
pub struct Pushover;

impl Strategy for Pushover {
    fn name(&self) -> &str {
        "pushover"
    }

    fn decide(&mut self, _ctx: &TurnContext) -> Result<Decision, StrategyError> {
        Ok(Decision::fold())
    }
}

/// Probes with small raises and gives up once a call costs more than half
/// the stack.
#[derive(Debug, Clone, Default)]
pub struct Cautious;

impl Strategy for Cautious {
    fn name(&self) -> &str {
        "cautious"
    }

    fn decide(&mut self, ctx: &TurnContext) -> Result<Decision, StrategyError> {
        let stack = ctx.me.chips;
        let owed = ctx.call_required;
        if stack == 0 {
            return Ok(Decision::fold());
        }
        // compare against half the stack without rounding
        if owed as u64 * 2 > stack as u64 {
            return Ok(Decision::fold());
        }
        let max_raise = (stack / 2).max(1);

        if owed == 0 {
            return Ok(Decision::raise((stack / 10).max(1).min(max_raise)));
        }
        let remaining = stack - owed;
        if remaining > 0 {
            return Ok(Decision::raise(owed.min(remaining).min(max_raise).max(1)));
        }
        Ok(Decision::call(owed))
    }
}
