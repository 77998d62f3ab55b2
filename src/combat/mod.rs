//! Turn-based combat against a single enemy
//!
//! A turn locks the action bar, runs every hero action, then lets a
//! surviving enemy strike back.

pub mod constants;
pub mod resolution;
pub mod turn;

pub use resolution::{
    attack_damage, enemy_strike_damage, resolve_enemy_retaliation, resolve_hero_phase,
    rest_heal, roll_victory_rewards, skill_heal, HeroPhaseOutcome, VictoryRewards,
};
pub use turn::{format_lock_position, resolve_turn, TurnOutcome, TurnResolution};
