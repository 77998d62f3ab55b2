//! Combat constants - all tunable values in one place
//!
//! Every formula is linear in the run level.

// Enemy scaling: hp = BASE + PER_LEVEL * level, attack = BASE + level
pub const NORMAL_HP_BASE: u32 = 18;
pub const NORMAL_HP_PER_LEVEL: u32 = 2;
pub const NORMAL_ATTACK_BASE: u32 = 5;
pub const ELITE_HP_BASE: u32 = 28;
pub const ELITE_HP_PER_LEVEL: u32 = 3;
pub const ELITE_ATTACK_BASE: u32 = 8;

// Hero actions
pub const ATTACK_DAMAGE_BASE: u32 = 4;
pub const ATTACK_BOOST_BONUS: u32 = 2;
pub const SKILL_HEAL_BASE: u32 = 3;
pub const REST_HEAL: u32 = 2;

// Encounter events
pub const EVENT_HEAL: u32 = 6;
pub const EVENT_DAMAGE: u32 = 5;

// Victory rewards
pub const NORMAL_LEVEL_GAIN: u32 = 1;
pub const ELITE_LEVEL_GAIN: u32 = 2;
pub const NORMAL_RELIC_CHANCE: f64 = 0.25;
pub const ELITE_RELIC_CHANCE: f64 = 0.7;
/// Share of relic drops that are Attack Boost; the rest are Overlap Charm
pub const ATTACK_BOOST_SHARE: f64 = 0.6;
