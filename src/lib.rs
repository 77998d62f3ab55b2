//! Actionbar Rogue - turn-based roguelite combat on a timing bar

pub mod action_bar;
pub mod assets;
pub mod combat;
pub mod core;
pub mod encounter;
pub mod entity;
pub mod game;
pub mod relic;

pub use crate::core::error::{CommandError, GameError, Result};
pub use game::{Game, GamePhase, TurnReport};
