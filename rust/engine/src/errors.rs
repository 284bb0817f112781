use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid card: '{0}'")]
    InvalidCard(String),
    #[error("Pot of ${0} has not been awarded")]
    PotNotAwarded(u32),
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Hole cards already full")]
    HoleCardsFull,
}

/// A rule violation by the acting seat. The message doubles as the
/// human-readable reason attached to the forced fold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("cannot check while facing a bet")]
    CannotCheck,
    #[error("attempted to call ${required} with only ${chips}")]
    CallUnaffordable { required: u32, chips: u32 },
    #[error("raise amount must be positive")]
    NonPositiveRaise,
    #[error("raise requires ${total} but only ${chips} available")]
    RaiseUnaffordable { total: u32, chips: u32 },
    #[error("unknown action '{0}'")]
    Unknown(String),
}
