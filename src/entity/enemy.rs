//! Enemies met in fight encounters

use serde::Serialize;
use std::fmt;

use crate::combat::constants::{
    ELITE_ATTACK_BASE, ELITE_HP_BASE, ELITE_HP_PER_LEVEL, NORMAL_ATTACK_BASE, NORMAL_HP_BASE,
    NORMAL_HP_PER_LEVEL,
};
use crate::core::types::Level;

/// Difficulty tier of a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnemyKind {
    Normal,
    Elite,
}

impl EnemyKind {
    /// Display name of the enemy spawned for this tier
    pub fn enemy_name(self) -> &'static str {
        match self {
            EnemyKind::Normal => "Ravager",
            EnemyKind::Elite => "Ravager Warlord",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyKind::Normal => write!(f, "Normal"),
            EnemyKind::Elite => write!(f, "Elite"),
        }
    }
}

/// A single enemy combatant
///
/// `current_hp` is always within `0..=max_hp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enemy {
    pub name: String,
    pub base_attack: u32,
    max_hp: u32,
    current_hp: u32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, max_hp: u32, base_attack: u32) -> Self {
        Self {
            name: name.into(),
            base_attack,
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Spawn the enemy for a fight of the given tier at the given level
    ///
    /// Normal: hp = 18 + 2*level, attack = 5 + level.
    /// Elite: hp = 28 + 3*level, attack = 8 + level.
    pub fn spawn(kind: EnemyKind, level: Level) -> Self {
        let (hp, attack) = match kind {
            EnemyKind::Normal => (
                NORMAL_HP_BASE + NORMAL_HP_PER_LEVEL * level,
                NORMAL_ATTACK_BASE + level,
            ),
            EnemyKind::Elite => (
                ELITE_HP_BASE + ELITE_HP_PER_LEVEL * level,
                ELITE_ATTACK_BASE + level,
            ),
        };
        Self::new(kind.enemy_name(), hp, attack)
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, returning the HP actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }
}
