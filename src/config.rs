//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which seats the CPU plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CpuSeats {
    /// Two humans.
    None,
    /// CPU is Player 1 (X).
    First,
    /// CPU is Player 2 (O).
    #[default]
    Second,
    /// CPU plays itself.
    Both,
}

impl CpuSeats {
    /// Checks if the CPU plays seat `id` (1 or 2).
    #[instrument]
    pub fn plays(self, id: u8) -> bool {
        match self {
            Self::None => false,
            Self::First => id == 1,
            Self::Second => id == 2,
            Self::Both => true,
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats played by the CPU.
    cpu: CpuSeats,

    /// Seed for the CPU's random source; OS entropy when absent.
    seed: Option<u64>,

    /// Stop after this many games instead of asking to play again.
    games: Option<u32>,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: Option<String>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(cpu = %config.cpu, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults if the file is missing.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        cpu: Option<CpuSeats>,
        seed: Option<u64>,
        games: Option<u32>,
    ) -> Result<Self, ConfigError> {
        if let Some(cpu) = cpu {
            self.cpu = cpu;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if games.is_some() {
            self.games = games;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.games == Some(0) {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_seats() {
        assert!(CpuSeats::Second.plays(2));
        assert!(!CpuSeats::Second.plays(1));
        assert!(CpuSeats::Both.plays(1) && CpuSeats::Both.plays(2));
        assert!(!CpuSeats::None.plays(2));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = GameConfig::default()
            .with_overrides(Some(CpuSeats::Both), Some(9), None)
            .unwrap();
        assert_eq!(config.cpu(), &CpuSeats::Both);
        assert_eq!(config.seed(), &Some(9));
        assert_eq!(config.games(), &None);
    }

    #[test]
    fn test_zero_games_rejected() {
        let err = GameConfig::default()
            .with_overrides(None, None, Some(0))
            .unwrap_err();
        assert_eq!(err.message, "games must be at least 1");
    }
}
