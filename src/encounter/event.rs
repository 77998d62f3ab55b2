//! Inline resolution of non-combat encounters

use rand::Rng;
use serde::Serialize;

use crate::combat::constants::{EVENT_DAMAGE, EVENT_HEAL};
use crate::core::types::MemberIndex;
use crate::entity::PartyMember;
use crate::relic::Relic;

/// Flavor text for the shop, which has no stock yet
pub const SHOP_MESSAGE: &str = "The wandering merchant has nothing to sell today.";

/// What happened during a mysterious event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventOutcome {
    Healed { member: MemberIndex, amount: u32 },
    RelicFound(Relic),
    Ambushed { member: MemberIndex, damage: u32 },
}

impl EventOutcome {
    pub fn describe(&self, party: &[PartyMember]) -> String {
        let name = |index: MemberIndex| party.get(index).map_or("Someone", |m| m.name.as_str());
        match *self {
            EventOutcome::Healed { member, amount } => {
                format!("A healing spring restores {amount} HP to {}.", name(member))
            }
            EventOutcome::RelicFound(relic) => format!("You found a relic: {relic}."),
            EventOutcome::Ambushed { member, damage } => {
                format!("A hidden trap hits {} for {damage} damage.", name(member))
            }
        }
    }
}

/// Resolve a mysterious event against the party
///
/// One of three branches is chosen uniformly: heal a random ally, grant a
/// random relic, or damage a random ally. Allies are picked from the whole
/// roster, downed members included.
///
/// Reported amounts are the HP actually gained or lost.
pub fn resolve_event<R: Rng + ?Sized>(
    party: &mut [PartyMember],
    relics: &mut Vec<Relic>,
    rng: &mut R,
) -> EventOutcome {
    match rng.gen_range(0..3) {
        0 => {
            let member = rng.gen_range(0..party.len());
            let amount = party[member].heal(EVENT_HEAL);
            EventOutcome::Healed { member, amount }
        }
        1 => {
            let relic = Relic::roll(rng);
            relics.push(relic);
            EventOutcome::RelicFound(relic)
        }
        _ => {
            let member = rng.gen_range(0..party.len());
            let damage = party[member].take_damage(EVENT_DAMAGE);
            EventOutcome::Ambushed { member, damage }
        }
    }
}
