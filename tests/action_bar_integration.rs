//! Action bar integration tests
//!
//! Bar generation, the relic pipeline and lock-position evaluation working
//! together.

use actionbar_rogue::action_bar::*;
use actionbar_rogue::entity::PartyMember;
use actionbar_rogue::relic::Relic;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn roster() -> Vec<PartyMember> {
    vec![
        PartyMember::new("Vera", 32),
        PartyMember::new("Roland", 40),
        PartyMember::new("Mira", 28),
    ]
}

fn build(seed: u64, relics: &[Relic]) -> ActionBar {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    ActionBar::build(&roster(), relics, &mut rng)
}

fn attack_segment(track: &ActionTrack) -> ActionSegment {
    *track
        .segments
        .iter()
        .find(|s| s.action == ActionType::Attack)
        .expect("every track has an Attack segment")
}

proptest! {
    #[test]
    fn fresh_tracks_partition_the_bar(seed in any::<u64>()) {
        let bar = build(seed, &[]);
        prop_assert_eq!(bar.tracks().len(), 3);

        for track in bar.tracks() {
            let segments = &track.segments;
            prop_assert_eq!(segments.len(), 3);
            prop_assert_eq!(segments[0].start, 0.0);
            prop_assert_eq!(segments[2].end, 1.0);
            for pair in segments.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            for segment in segments {
                prop_assert!(segment.width() >= MIN_SEGMENT_WIDTH - 1e-9);
            }
            let mut actions: Vec<ActionType> = segments.iter().map(|s| s.action).collect();
            actions.sort_by_key(|a| *a as u8);
            prop_assert_eq!(actions, ActionType::ALL.to_vec());
        }
    }

    #[test]
    fn every_position_fires_something(seed in any::<u64>(), position in -0.5f64..1.5) {
        let bar = build(seed, &[Relic::OverlapCharm]);
        let evaluation = bar.evaluate(position);
        prop_assert!((0.0..=1.0).contains(&evaluation.position));
        for track in &evaluation.tracks {
            prop_assert!(!track.actions.is_empty());
        }
    }
}

#[test]
fn test_overlap_charm_only_touches_attack() {
    for seed in 0..50 {
        let plain = build(seed, &[]);
        let charmed = build(seed, &[Relic::OverlapCharm]);

        for (before, after) in plain.tracks().iter().zip(charmed.tracks()) {
            let old = attack_segment(before);
            let new = attack_segment(after);
            assert_eq!(new.stack, old.stack + 1);
            assert!((new.start - (old.start - OVERLAP_CHARM_LEAD).max(0.0)).abs() < 1e-9);
            assert!((new.end - (old.end + OVERLAP_CHARM_TRAIL).min(1.0)).abs() < 1e-9);

            for (a, b) in before.segments.iter().zip(&after.segments) {
                if a.action != ActionType::Attack {
                    assert_eq!(a, b);
                }
            }
        }
    }
}

#[test]
fn test_attack_boost_leaves_bar_identical() {
    assert_eq!(build(8, &[]), build(8, &[Relic::AttackBoost]));
}

#[test]
fn test_widened_attack_overlaps_neighbour() {
    let bar = build(13, &[Relic::OverlapCharm]);

    for track in bar.tracks() {
        let attack = attack_segment(track);
        let neighbour = track
            .segments
            .iter()
            .find(|s| s.action != ActionType::Attack && s.end > attack.start && s.start < attack.end)
            .copied()
            .expect("a widened Attack segment overlaps at least one neighbour");

        let overlap_start = attack.start.max(neighbour.start);
        let overlap_end = attack.end.min(neighbour.end);
        let position = (overlap_start + overlap_end) / 2.0;

        let actions = track.actions_at(position);
        assert_eq!(actions.iter().filter(|a| **a == ActionType::Attack).count(), 2);
        assert!(actions.contains(&neighbour.action));
    }
}

#[test]
fn test_uncovered_position_defaults_to_rest() {
    let bar = ActionBar::from_tracks(vec![ActionTrack::new(
        0,
        "Vera",
        vec![
            ActionSegment::new(0.0, 0.3, ActionType::Attack),
            ActionSegment::new(0.6, 1.0, ActionType::Skill),
        ],
    )]);

    let evaluation = bar.evaluate(0.45);
    assert_eq!(evaluation.tracks[0].actions, vec![ActionType::Rest]);
}

#[test]
fn test_downed_members_get_tracks() {
    let mut party = roster();
    for member in party.iter_mut() {
        member.take_damage(100);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let bar = ActionBar::build(&party, &[], &mut rng);
    assert_eq!(bar.tracks().len(), 3);
    assert_eq!(bar.track_for(2).map(|t| t.member_name.as_str()), Some("Mira"));
}
