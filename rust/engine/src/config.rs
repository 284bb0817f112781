use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default starting stack for each seat in chips
pub const DEFAULT_STARTING_CHIPS: u32 = 100;

/// Table-wide settings threaded through table construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_chips: u32,
    /// Force the tournament to end after this many hands
    pub max_hands: Option<u32>,
    /// Deck seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
            max_hands: None,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_chips == 0 {
            return Err(GameError::InvalidConfig(
                "starting_chips must be >0".into(),
            ));
        }
        if self.max_hands == Some(0) {
            return Err(GameError::InvalidConfig("max_hands must be >=1".into()));
        }
        Ok(())
    }
}
