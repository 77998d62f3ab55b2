//! HP-bearing combatants: the player's party and the enemy they face

pub mod enemy;
pub mod party;

pub use enemy::{Enemy, EnemyKind};
pub use party::{living_members, PartyMember};
