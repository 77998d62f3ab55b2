//! Game configuration loaded from TOML
//!
//! Only the roster and the message log size are configurable. Combat
//! formulas are fixed and live in `combat::constants`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default location of the shipped configuration file
pub const DEFAULT_CONFIG_PATH: &str = "data/game.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// One starting party member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberConfig {
    pub name: String,
    pub max_hp: u32,
}

impl MemberConfig {
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
        }
    }
}

/// Configuration for a game instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Party roster in turn order. Recreated on every reset.
    pub roster: Vec<MemberConfig>,

    /// Maximum number of retained log messages
    ///
    /// When the log is full the oldest message is evicted.
    pub message_log_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster: vec![
                MemberConfig::new("Vera", 32),
                MemberConfig::new("Roland", 40),
                MemberConfig::new("Mira", 28),
            ],
            message_log_capacity: 200,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.is_empty() {
            return Err(ConfigError::Invalid("roster must not be empty".into()));
        }

        if let Some(member) = self.roster.iter().find(|m| m.max_hp == 0) {
            return Err(ConfigError::Invalid(format!(
                "party member {} must have max_hp > 0",
                member.name
            )));
        }

        if self.roster.iter().any(|m| m.name.trim().is_empty()) {
            return Err(ConfigError::Invalid("party member names must not be blank".into()));
        }

        if self.message_log_capacity == 0 {
            return Err(ConfigError::Invalid(
                "message_log_capacity must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let config = GameConfig::default();
        let names: Vec<&str> = config.roster.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Vera", "Roland", "Mira"]);
        assert_eq!(config.message_log_capacity, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::parse_toml("message_log_capacity = 50").unwrap();
        assert_eq!(config.message_log_capacity, 50);
        assert_eq!(config.roster.len(), 3);
    }

    #[test]
    fn test_custom_roster() {
        let toml_str = r#"
            [[roster]]
            name = "Solo"
            max_hp = 12
        "#;
        let config = GameConfig::parse_toml(toml_str).unwrap();
        assert_eq!(config.roster, vec![MemberConfig::new("Solo", 12)]);
    }

    #[test]
    fn test_rejects_empty_roster() {
        let result = GameConfig::parse_toml("roster = []");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_hp() {
        let toml_str = r#"
            [[roster]]
            name = "Ghost"
            max_hp = 0
        "#;
        assert!(matches!(
            GameConfig::parse_toml(toml_str),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            GameConfig::parse_toml("roster = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_shipped_config() {
        let config = GameConfig::load(Path::new(DEFAULT_CONFIG_PATH)).expect("Should load shipped config");
        assert_eq!(config, GameConfig::default());
    }
}
