use crate::cli::TableArgs;
use pokerarena_ai::STRATEGY_NAMES;
use pokerarena_engine::config::{TableConfig, DEFAULT_STARTING_CHIPS};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "POKERARENA_CONFIG";
pub const SEED_ENV: &str = "POKERARENA_SEED";
pub const STARTING_CHIPS_ENV: &str = "POKERARENA_STARTING_CHIPS";
pub const MAX_HANDS_ENV: &str = "POKERARENA_MAX_HANDS";
pub const MOVE_INTERVAL_ENV: &str = "POKERARENA_MOVE_INTERVAL_MS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub max_hands: Option<u32>,
    pub seed: Option<u64>,
    pub move_interval_ms: u64,
    pub seats: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub max_hands: ValueSource,
    pub seed: ValueSource,
    pub move_interval_ms: ValueSource,
    pub seats: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            max_hands: ValueSource::Default,
            seed: ValueSource::Default,
            move_interval_ms: ValueSource::Default,
            seats: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
            max_hands: None,
            seed: None,
            move_interval_ms: 1_000,
            seats: STRATEGY_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// The engine-facing part of the configuration.
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            starting_chips: self.starting_chips,
            max_hands: self.max_hands,
            seed: self.seed,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Defaults, then the TOML file named by `POKERARENA_CONFIG`, then
/// `POKERARENA_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.max_hands {
            cfg.max_hands = Some(v);
            sources.max_hands = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.move_interval_ms {
            cfg.move_interval_ms = v;
            sources.move_interval_ms = ValueSource::File;
        }
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(parse_env(SEED_ENV, &seed)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(chips) = env_value(STARTING_CHIPS_ENV) {
        cfg.starting_chips = parse_env(STARTING_CHIPS_ENV, &chips)?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(limit) = env_value(MAX_HANDS_ENV) {
        cfg.max_hands = Some(parse_env(MAX_HANDS_ENV, &limit)?);
        sources.max_hands = ValueSource::Env;
    }
    if let Some(ms) = env_value(MOVE_INTERVAL_ENV) {
        cfg.move_interval_ms = parse_env(MOVE_INTERVAL_ENV, &ms)?;
        sources.move_interval_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Resolves the configuration and layers the command-line flags on top.
pub fn resolve(args: &TableArgs) -> Result<ConfigResolved, ConfigError> {
    let mut resolved = load_with_sources()?;
    apply_overrides(&mut resolved, args);
    validate(&resolved.config)?;
    Ok(resolved)
}

pub fn apply_overrides(resolved: &mut ConfigResolved, args: &TableArgs) {
    let ConfigResolved { config, sources } = resolved;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
        sources.seed = ValueSource::Cli;
    }
    if let Some(chips) = args.chips {
        config.starting_chips = chips;
        sources.starting_chips = ValueSource::Cli;
    }
    if let Some(limit) = args.max_hands {
        config.max_hands = Some(limit);
        sources.max_hands = ValueSource::Cli;
    }
    if let Some(seats) = &args.seats {
        config.seats = seats.iter().map(|s| s.trim().to_string()).collect();
        sources.seats = ValueSource::Cli;
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    max_hands: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    move_interval_ms: Option<u64>,
    #[serde(default)]
    seats: Option<Vec<String>>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", key, raw)))
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if cfg.seats.len() < 2 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: at least two seats are required".into(),
        ));
    }
    if let Some(unknown) = cfg
        .seats
        .iter()
        .find(|s| !STRATEGY_NAMES.contains(&s.trim().to_ascii_lowercase().as_str()))
    {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy '{}' (expected one of: {})",
            unknown,
            STRATEGY_NAMES.join(", ")
        )));
    }
    Ok(())
}
