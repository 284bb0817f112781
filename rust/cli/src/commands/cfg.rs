//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, each value paired with
//! where it came from (default, file, env).
//!
//! ```json
//! {
//!   "starting_chips": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "max_hands": {
            "value": config.max_hands,
            "source": sources.max_hands,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "move_interval_ms": {
            "value": config.move_interval_ms,
            "source": sources.move_interval_ms,
        },
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
