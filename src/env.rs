use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::battle::{DEFAULT_ELO_GAIN, DEFAULT_ELO_LOSS, DEFAULT_MAX_ROUNDS};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub server: ServerSettings,
    #[serde(default)]
    pub battle: BattleSettings,
    #[serde(default)]
    pub matchmaking: MatchmakingSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        println!("Loading configuration for RUN_MODE: {}", &run_mode);

        let s = Config::builder()
            // Load environment-specific file (e.g., development.toml, production.toml)
            .add_source(
                File::with_name(&format!("config/{}", run_mode))
                    .format(FileFormat::Toml)
                    .required(true),
            )
            // Add environment variables (e.g., APP__BATTLE__MAX_ROUNDS=50)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub directory: String,
    pub filename: String,
}

/// Fight rules. The defaults are the canonical game rules.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BattleSettings {
    /// 라운드 상한. 도달 시 무승부
    pub max_rounds: u32,
    pub elo_gain: i32,
    pub elo_loss: i32,
}

impl Default for BattleSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            elo_gain: DEFAULT_ELO_GAIN,
            elo_loss: DEFAULT_ELO_LOSS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MatchmakingSettings {
    /// Base seed for card draws. Unset means fresh entropy per fight.
    pub rng_seed: Option<u64>,
}
