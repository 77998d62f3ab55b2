//! Game flow: phases, commands and the player-facing message log

pub mod messages;
pub mod state;

pub use messages::{GameMessage, MessageLog, Severity};
pub use state::{Game, GamePhase, TurnReport};
