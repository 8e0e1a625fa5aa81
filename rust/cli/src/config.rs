use serde::{Deserialize, Serialize};
use std::fs;

use blackjack_engine::hand::BLACKJACK;
use blackjack_engine::rules::DEALER_STANDS_ON;

/// Default stake offered at the bet prompt.
pub const DEFAULT_BET: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub default_bet: u32,
    /// Auto-play threshold for `sim`: hit below it, stand on it
    pub stand_on: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub default_bet: ValueSource,
    pub stand_on: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            default_bet: ValueSource::Default,
            stand_on: ValueSource::Default,
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
            seed: None,
            default_bet: DEFAULT_BET,
            stand_on: DEALER_STANDS_ON,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolve configuration: defaults, then the TOML file named by
/// `BLACKJACK_CONFIG`, then `BLACKJACK_*` environment variables.
/// Command-line flags are applied on top by the caller.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BLACKJACK_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.default_bet {
            cfg.default_bet = v;
            sources.default_bet = ValueSource::File;
        }
        if let Some(v) = f.stand_on {
            cfg.stand_on = v;
            sources.stand_on = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BLACKJACK_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bet) = std::env::var("BLACKJACK_BET")
        && !bet.is_empty()
    {
        cfg.default_bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet".into()))?;
        sources.default_bet = ValueSource::Env;
    }
    if let Ok(stand_on) = std::env::var("BLACKJACK_STAND_ON")
        && !stand_on.is_empty()
    {
        cfg.stand_on = stand_on
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid stand_on".into()))?;
        sources.stand_on = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    default_bet: Option<u32>,
    #[serde(default)]
    stand_on: Option<u32>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.default_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: default_bet must be >0".into(),
        ));
    }
    if !(2..=BLACKJACK).contains(&cfg.stand_on) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: stand_on must be between 2 and 21".into(),
        ));
    }
    Ok(())
}
