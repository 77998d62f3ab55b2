//! Per-member action tracks

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::action_bar::constants::MIN_SEGMENT_WIDTH;
use crate::action_bar::segment::{ActionSegment, ActionType};
use crate::core::types::MemberIndex;
use crate::entity::PartyMember;

/// One party member's timeline
///
/// Freshly generated tracks partition [0, 1] into three segments sorted by
/// start. Relics may later widen segments without re-sorting, so neither
/// property is guaranteed once relics have run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionTrack {
    /// Roster index of the owning member
    pub member: MemberIndex,
    pub member_name: String,
    pub segments: Vec<ActionSegment>,
}

impl ActionTrack {
    pub fn new(member: MemberIndex, member_name: impl Into<String>, segments: Vec<ActionSegment>) -> Self {
        Self {
            member,
            member_name: member_name.into(),
            segments,
        }
    }

    /// Generate a fresh, relic-free track for a party member
    pub fn generate<R: Rng + ?Sized>(member: MemberIndex, party_member: &PartyMember, rng: &mut R) -> Self {
        Self::new(member, party_member.name.clone(), partition_unit_interval(rng))
    }

    /// Actions fired when the bar locks at `position`
    ///
    /// Every segment containing the position contributes `stack` copies of
    /// its action, in list order. An uncovered position falls back to a
    /// single Rest.
    pub fn actions_at(&self, position: f64) -> Vec<ActionType> {
        let actions: Vec<ActionType> = self
            .segments
            .iter()
            .filter(|s| s.contains(position))
            .flat_map(|s| s.expand())
            .collect();

        if actions.is_empty() {
            vec![ActionType::Rest]
        } else {
            actions
        }
    }
}

/// Split [0, 1] into three segments, one per action type
///
/// Two uniform cut points are sorted and then pushed right where needed so
/// that every segment is at least `MIN_SEGMENT_WIDTH` wide, the last one
/// included. The action types are assigned by a uniform shuffle.
///
/// Draws from `rng`: two floats, then one shuffle.
pub fn partition_unit_interval<R: Rng + ?Sized>(rng: &mut R) -> Vec<ActionSegment> {
    let a: f64 = rng.gen();
    let b: f64 = rng.gen();
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    let first_cut = low.max(MIN_SEGMENT_WIDTH).min(1.0 - 2.0 * MIN_SEGMENT_WIDTH);
    let second_cut = high.max(first_cut + MIN_SEGMENT_WIDTH).min(1.0 - MIN_SEGMENT_WIDTH);

    let mut actions = ActionType::ALL;
    actions.shuffle(rng);

    let mut segments = vec![
        ActionSegment::new(0.0, first_cut, actions[0]),
        ActionSegment::new(first_cut, second_cut, actions[1]),
        ActionSegment::new(second_cut, 1.0, actions[2]),
    ];
    segments.sort_by(|x, y| x.start.total_cmp(&y.start));
    segments
}
