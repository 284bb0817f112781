//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokerarena",
    version,
    about = "Autonomous no-limit hold'em tournaments between built-in strategies"
)]
pub struct PokerArenaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Table overrides shared by every command that seats players.
///
/// Anything left unset falls back to the resolved configuration
/// (file, then environment, then defaults).
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// RNG seed for the deck and the seeded strategies
    #[arg(long)]
    pub seed: Option<u64>,
    /// Starting chips per seat
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub chips: Option<u32>,
    /// End the tournament after this many hands
    #[arg(long = "max-hands", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_hands: Option<u32>,
    /// Comma-separated strategy names, one per seat
    #[arg(long, value_delimiter = ',')]
    pub seats: Option<Vec<String>>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one tournament, printing the table after every step
    Play {
        #[command(flatten)]
        table: TableArgs,
        /// Pause between steps in milliseconds
        #[arg(long = "interval-ms")]
        interval_ms: Option<u64>,
        /// Print only engine notes, not the table
        #[arg(long)]
        quiet: bool,
    },
    /// Run several tournaments back to back and tally champions
    Sim {
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        tournaments: u32,
        /// Write hand histories as JSON Lines
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Deal a single hand, reveal the board and show the winners
    Deal {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Deal { .. } => "deal",
            Commands::Cfg => "cfg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shared_table_flags() {
        let cli = PokerArenaCli::try_parse_from([
            "pokerarena",
            "play",
            "--seed",
            "7",
            "--chips",
            "50",
            "--seats",
            "shove,passive",
            "--interval-ms",
            "0",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                table, interval_ms, ..
            } => {
                assert_eq!(table.seed, Some(7));
                assert_eq!(table.chips, Some(50));
                assert_eq!(
                    table.seats,
                    Some(vec!["shove".to_string(), "passive".to_string()])
                );
                assert_eq!(interval_ms, Some(0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_chips_and_zero_tournaments() {
        assert!(PokerArenaCli::try_parse_from(["pokerarena", "deal", "--chips", "0"]).is_err());
        assert!(
            PokerArenaCli::try_parse_from(["pokerarena", "sim", "--tournaments", "0"]).is_err()
        );
    }

    #[test]
    fn every_subcommand_parses() {
        for args in [
            vec!["pokerarena", "play"],
            vec!["pokerarena", "sim", "--tournaments", "2"],
            vec!["pokerarena", "deal"],
            vec!["pokerarena", "cfg"],
        ] {
            let cli = PokerArenaCli::try_parse_from(&args).unwrap();
            assert_eq!(cli.cmd.name(), args[1]);
        }
    }
}
