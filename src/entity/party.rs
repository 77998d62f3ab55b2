//! Party members

use serde::Serialize;

use crate::core::config::MemberConfig;
use crate::core::types::MemberIndex;

/// A member of the player's party
///
/// `current_hp` is always within `0..=max_hp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyMember {
    pub name: String,
    max_hp: u32,
    current_hp: u32,
}

impl PartyMember {
    /// Create a member at full health
    pub fn new(name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            current_hp: max_hp,
        }
    }

    pub fn from_config(config: &MemberConfig) -> Self {
        Self::new(config.name.clone(), config.max_hp)
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_down(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, returning the HP actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP up to the maximum, returning the HP actually gained
    ///
    /// Healing a downed member brings them back up.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp - self.current_hp);
        self.current_hp += gained;
        gained
    }
}

/// Roster indices of members that are still standing
pub fn living_members(party: &[PartyMember]) -> Vec<MemberIndex> {
    party
        .iter()
        .enumerate()
        .filter(|(_, m)| !m.is_down())
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_member_is_full_health() {
        let member = PartyMember::new("Vera", 32);
        assert_eq!(member.current_hp(), 32);
        assert!(!member.is_down());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut member = PartyMember::new("Mira", 10);
        assert_eq!(member.take_damage(25), 10);
        assert_eq!(member.current_hp(), 0);
        assert!(member.is_down());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut member = PartyMember::new("Roland", 40);
        member.take_damage(3);
        assert_eq!(member.heal(10), 3);
        assert_eq!(member.current_hp(), 40);
    }

    #[test]
    fn test_living_members_skips_downed() {
        let mut party = vec![
            PartyMember::new("A", 5),
            PartyMember::new("B", 5),
            PartyMember::new("C", 5),
        ];
        party[1].take_damage(5);
        assert_eq!(living_members(&party), vec![0, 2]);
    }

    proptest! {
        #[test]
        fn hp_stays_clamped(
            max_hp in 1u32..200,
            ops in proptest::collection::vec((any::<bool>(), 0u32..100), 0..64),
        ) {
            let mut member = PartyMember::new("Prop", max_hp);
            for (is_heal, amount) in ops {
                if is_heal {
                    member.heal(amount);
                } else {
                    member.take_damage(amount);
                }
                prop_assert!(member.current_hp() <= member.max_hp());
                prop_assert_eq!(member.is_down(), member.current_hp() == 0);
            }
        }
    }
}
