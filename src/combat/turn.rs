//! One combat round

use rand::Rng;

use crate::action_bar::ActionBar;
use crate::combat::resolution::{
    resolve_enemy_retaliation, resolve_hero_phase, HeroPhaseOutcome,
};
use crate::core::types::Level;
use crate::entity::{Enemy, PartyMember};
use crate::game::messages::GameMessage;
use crate::relic::{has_attack_boost, Relic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A hero action brought the enemy to 0 HP
    Victory,
    /// The enemy is still up and at least one member is standing
    EnemyStands,
    /// Every party member is down
    PartyDefeated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnResolution {
    /// Lock position after clamping
    pub position: f64,
    pub outcome: TurnOutcome,
    pub messages: Vec<GameMessage>,
}

/// Log text announcing where the bar locked, e.g. `lock position 50%`
pub fn format_lock_position(position: f64) -> String {
    format!("lock position {}%", (position * 100.0).round())
}

/// Resolve one round of combat at `position`
///
/// hero phase -> (enemy survived) retaliation -> defeat check.
/// Victory rewards are left to the caller.
#[allow(clippy::too_many_arguments)]
pub fn resolve_turn<R: Rng + ?Sized>(
    party: &mut [PartyMember],
    enemy: &mut Enemy,
    bar: &ActionBar,
    position: f64,
    level: Level,
    relics: &[Relic],
    turn: u32,
    rng: &mut R,
) -> TurnResolution {
    let evaluation = bar.evaluate(position);
    let mut messages = vec![GameMessage::info(format!(
        "Turn {}: {}",
        turn,
        format_lock_position(evaluation.position)
    ))];
    tracing::debug!(turn, position = evaluation.position, "Locked action bar");

    let hero_outcome = resolve_hero_phase(
        party,
        enemy,
        &evaluation,
        level,
        has_attack_boost(relics),
        &mut messages,
    );

    let outcome = match hero_outcome {
        HeroPhaseOutcome::EnemyDefeated => TurnOutcome::Victory,
        HeroPhaseOutcome::EnemySurvived => {
            resolve_enemy_retaliation(party, enemy, level, rng, &mut messages);

            if party.iter().all(PartyMember::is_down) {
                messages.push(GameMessage::danger("The party has fallen. Game over."));
                TurnOutcome::PartyDefeated
            } else {
                TurnOutcome::EnemyStands
            }
        }
    };

    TurnResolution {
        position: evaluation.position,
        outcome,
        messages,
    }
}
