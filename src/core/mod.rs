pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, MemberConfig};
pub use error::{CommandError, GameError, Result};
pub use types::{GameRng, Level};
