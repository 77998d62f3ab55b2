use thiserror::Error;

use crate::assets::atlas::AtlasError;
use crate::core::config::ConfigError;
use crate::game::GamePhase;

/// Rejection of a player command. Returned before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Cannot do that now: expected phase {expected}, but the game is in {actual}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("No option at index {index} ({available} available)")]
    OptionOutOfRange { index: usize, available: usize },

    #[error("No combat is active")]
    NoActiveCombat,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Command rejected: {0}")]
    Command(#[from] CommandError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    Atlas(#[from] AtlasError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
