//! Core type definitions used throughout the codebase

use rand_chacha::ChaCha8Rng;

/// Deterministic random stream owned by a single game instance
pub type GameRng = ChaCha8Rng;

/// Run progression level (starts at 1)
pub type Level = u32;

/// Index of a party member in roster order
pub type MemberIndex = usize;
