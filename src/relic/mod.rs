//! Relics: permanent run modifiers
//!
//! A relic can reshape a member's action track when the bar is built, add to
//! outgoing damage when an attack resolves, or both. Effects are pure: a
//! relic returns a new segment list rather than editing one in place.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action_bar::constants::{OVERLAP_CHARM_LEAD, OVERLAP_CHARM_TRAIL};
use crate::action_bar::segment::{ActionSegment, ActionType};
use crate::combat::constants::ATTACK_BOOST_SHARE;
use crate::entity::PartyMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relic {
    /// Attacks deal bonus damage. No effect on the bar.
    AttackBoost,
    /// Widens the first Attack segment of every track and stacks it once more.
    OverlapCharm,
}

impl Relic {
    pub fn name(self) -> &'static str {
        match self {
            Relic::AttackBoost => "Attack Boost",
            Relic::OverlapCharm => "Overlap Charm",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Relic::AttackBoost => "Attacks deal +2 damage.",
            Relic::OverlapCharm => {
                "Each ally's Attack segment grows wider and strikes one extra time."
            }
        }
    }

    /// Draw a relic: Attack Boost 60% of the time, Overlap Charm otherwise
    ///
    /// Consumes exactly one draw from `rng`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(ATTACK_BOOST_SHARE) {
            Relic::AttackBoost
        } else {
            Relic::OverlapCharm
        }
    }
}

impl fmt::Display for Relic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run one relic over a member's segment list
///
/// The member is passed so effects can depend on who owns the track; no
/// current relic does.
pub fn apply_relic(
    relic: Relic,
    _member: &PartyMember,
    segments: Vec<ActionSegment>,
) -> Vec<ActionSegment> {
    match relic {
        Relic::AttackBoost => segments,
        Relic::OverlapCharm => widen_first_attack(segments),
    }
}

/// Replace the first Attack segment with a wider, stacked copy
///
/// The list is not re-sorted afterwards.
fn widen_first_attack(mut segments: Vec<ActionSegment>) -> Vec<ActionSegment> {
    if let Some(segment) = segments.iter_mut().find(|s| s.action == ActionType::Attack) {
        *segment = ActionSegment::stacked(
            (segment.start - OVERLAP_CHARM_LEAD).max(0.0),
            (segment.end + OVERLAP_CHARM_TRAIL).min(1.0),
            segment.action,
            segment.stack + 1,
        );
    }
    segments
}

/// Whether any owned relic boosts attack damage. Copies do not stack.
pub fn has_attack_boost(relics: &[Relic]) -> bool {
    relics.contains(&Relic::AttackBoost)
}
