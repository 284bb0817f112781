use crate::errors::InvalidAction;
use crate::player::PlayerAction as A;

/// A legal action with the chips it moves from the stack into the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Call for the given number of chips
    Call(u32),
    /// Commit `call + raise` chips in total
    Raise(u32),
}

/// Checks an action against the seat's stack and what it owes.
///
/// A call with nothing owed is treated as a check. There is no minimum
/// raise beyond one chip, and no implicit all-in: an unaffordable call or
/// raise is a violation.
///
/// # Errors
///
/// - [`InvalidAction::CannotCheck`] when checking while facing a bet
/// - [`InvalidAction::CallUnaffordable`] when the call exceeds the stack
/// - [`InvalidAction::NonPositiveRaise`] for a zero raise
/// - [`InvalidAction::RaiseUnaffordable`] when call plus raise exceeds the stack
///
/// # Examples
///
/// ```
/// use pokerarena_engine::rules::{check_action, ValidatedAction};
/// use pokerarena_engine::player::PlayerAction;
/// use pokerarena_engine::errors::InvalidAction;
///
/// assert_eq!(check_action(100, 20, PlayerAction::Call), Ok(ValidatedAction::Call(20)));
/// assert_eq!(check_action(100, 20, PlayerAction::Raise(30)), Ok(ValidatedAction::Raise(50)));
/// assert_eq!(check_action(100, 0, PlayerAction::Call), Ok(ValidatedAction::Check));
///
/// assert_eq!(
///     check_action(10, 50, PlayerAction::Call),
///     Err(InvalidAction::CallUnaffordable { required: 50, chips: 10 })
/// );
/// ```
pub fn check_action(
    chips: u32,
    call_required: u32,
    action: A,
) -> Result<ValidatedAction, InvalidAction> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if call_required == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(InvalidAction::CannotCheck)
            }
        }
        A::Call => {
            if call_required == 0 {
                Ok(ValidatedAction::Check)
            } else if call_required > chips {
                Err(InvalidAction::CallUnaffordable {
                    required: call_required,
                    chips,
                })
            } else {
                Ok(ValidatedAction::Call(call_required))
            }
        }
        A::Raise(amount) => {
            if amount == 0 {
                return Err(InvalidAction::NonPositiveRaise);
            }
            let total = call_required.saturating_add(amount);
            if total > chips {
                Err(InvalidAction::RaiseUnaffordable { total, chips })
            } else {
                Ok(ValidatedAction::Raise(total))
            }
        }
    }
}

/// A strategy's request after normalization, before it is trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requested {
    Fold,
    Check,
    /// Call; the amount must name the exact chips owed
    Call(Option<u32>),
    /// Raise by the given amount on top of the call
    Raise(Option<u32>),
    /// Commit the whole stack
    AllIn,
    Unknown(String),
}

/// Whether a strategy's request may reach the state machine. Stricter
/// than [`check_action`]: a call must state the exact amount owed and a
/// raise must leave chips beyond the call.
pub fn validate_request(chips: u32, call_required: u32, request: &Requested) -> bool {
    match request {
        Requested::Fold => true,
        Requested::Check => call_required == 0,
        Requested::AllIn => chips > 0,
        Requested::Call(amount) => {
            if call_required == 0 {
                matches!(amount, None | Some(0))
            } else {
                chips > 0 && call_required <= chips && *amount == Some(call_required)
            }
        }
        Requested::Raise(amount) => match amount {
            Some(a) if *a > 0 => {
                chips > call_required && call_required as u64 + *a as u64 <= chips as u64
            }
            _ => false,
        },
        Requested::Unknown(_) => false,
    }
}

/// Turns an all-in into a call or a raise of the remaining stack.
/// `None` when the stack cannot even cover the call.
pub fn resolve_all_in(chips: u32, call_required: u32) -> Option<A> {
    if chips == 0 || call_required > chips {
        return None;
    }
    match chips - call_required {
        0 => Some(A::Call),
        raise => Some(A::Raise(raise)),
    }
}
