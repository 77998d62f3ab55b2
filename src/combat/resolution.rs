//! Hero action and enemy retaliation resolution
//!
//! Damage and healing are flat values scaled by the run level.

use rand::Rng;
use serde::Serialize;

use crate::action_bar::{ActionType, BarEvaluation};
use crate::combat::constants::{
    ATTACK_BOOST_BONUS, ATTACK_DAMAGE_BASE, ELITE_LEVEL_GAIN, ELITE_RELIC_CHANCE,
    NORMAL_LEVEL_GAIN, NORMAL_RELIC_CHANCE, REST_HEAL, SKILL_HEAL_BASE,
};
use crate::core::types::{Level, MemberIndex};
use crate::entity::{living_members, Enemy, EnemyKind, PartyMember};
use crate::game::messages::GameMessage;
use crate::relic::Relic;

/// Damage dealt by one hero Attack
pub fn attack_damage(level: Level, attack_boost: bool) -> u32 {
    let bonus = if attack_boost { ATTACK_BOOST_BONUS } else { 0 };
    ATTACK_DAMAGE_BASE + level + bonus
}

/// HP restored to the acting member by one Skill
pub fn skill_heal(level: Level) -> u32 {
    SKILL_HEAL_BASE + level / 2
}

/// HP restored to the acting member by one Rest
pub fn rest_heal() -> u32 {
    REST_HEAL
}

/// Damage dealt by an enemy strike
pub fn enemy_strike_damage(enemy: &Enemy, level: Level) -> u32 {
    enemy.base_attack + level
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPhaseOutcome {
    EnemyDefeated,
    EnemySurvived,
}

/// Execute every hero action from an evaluated bar against the enemy
///
/// Members act in roster order and each runs its own action list in order.
/// The phase stops at the first action that brings the enemy to 0 HP; no
/// queued action after it runs, for any member. Downed members still act.
pub fn resolve_hero_phase(
    party: &mut [PartyMember],
    enemy: &mut Enemy,
    evaluation: &BarEvaluation,
    level: Level,
    attack_boost: bool,
    log: &mut Vec<GameMessage>,
) -> HeroPhaseOutcome {
    for track in &evaluation.tracks {
        let Some(member) = party.get_mut(track.member) else {
            continue;
        };

        for &action in &track.actions {
            match action {
                ActionType::Attack => {
                    let dealt = enemy.take_damage(attack_damage(level, attack_boost));
                    log.push(GameMessage::info(format!(
                        "{} attacks {} for {} damage ({}/{}).",
                        member.name,
                        enemy.name,
                        dealt,
                        enemy.current_hp(),
                        enemy.max_hp()
                    )));

                    if enemy.is_defeated() {
                        log.push(GameMessage::success(format!("{} is defeated!", enemy.name)));
                        return HeroPhaseOutcome::EnemyDefeated;
                    }
                }
                ActionType::Skill => {
                    let gained = member.heal(skill_heal(level));
                    log.push(GameMessage::info(format!(
                        "{} uses a skill and recovers {} HP ({}/{}).",
                        member.name,
                        gained,
                        member.current_hp(),
                        member.max_hp()
                    )));
                }
                ActionType::Rest => {
                    let gained = member.heal(rest_heal());
                    log.push(GameMessage::info(format!(
                        "{} rests and recovers {} HP ({}/{}).",
                        member.name,
                        gained,
                        member.current_hp(),
                        member.max_hp()
                    )));
                }
            }
        }
    }

    HeroPhaseOutcome::EnemySurvived
}

/// The enemy strikes one random living member
///
/// Returns the struck member, or `None` without touching `rng` when nobody
/// is standing.
pub fn resolve_enemy_retaliation<R: Rng + ?Sized>(
    party: &mut [PartyMember],
    enemy: &Enemy,
    level: Level,
    rng: &mut R,
    log: &mut Vec<GameMessage>,
) -> Option<MemberIndex> {
    let living = living_members(party);
    if living.is_empty() {
        return None;
    }

    let target = living[rng.gen_range(0..living.len())];
    let member = &mut party[target];
    let lost = member.take_damage(enemy_strike_damage(enemy, level));
    log.push(GameMessage::warning(format!(
        "{} strikes {} for {} damage ({}/{}).",
        enemy.name,
        member.name,
        lost,
        member.current_hp(),
        member.max_hp()
    )));

    if member.is_down() {
        log.push(GameMessage::danger(format!("{} falls!", member.name)));
    }

    Some(target)
}

/// Spoils of a won fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VictoryRewards {
    pub level_gain: u32,
    pub relic: Option<Relic>,
}

/// Roll rewards for defeating an enemy of the given tier
///
/// Draws one float for the relic chance and, on success, one more for the
/// relic kind.
pub fn roll_victory_rewards<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> VictoryRewards {
    let (level_gain, relic_chance) = match kind {
        EnemyKind::Normal => (NORMAL_LEVEL_GAIN, NORMAL_RELIC_CHANCE),
        EnemyKind::Elite => (ELITE_LEVEL_GAIN, ELITE_RELIC_CHANCE),
    };

    let relic = if rng.gen_bool(relic_chance) {
        Some(Relic::roll(rng))
    } else {
        None
    };

    VictoryRewards { level_gain, relic }
}
