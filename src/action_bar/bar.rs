//! The full action bar: one track per party member

use rand::Rng;
use serde::Serialize;

use crate::action_bar::segment::ActionType;
use crate::action_bar::track::ActionTrack;
use crate::core::types::MemberIndex;
use crate::entity::PartyMember;
use crate::relic::{apply_relic, Relic};

/// Actions one member performs this turn, in execution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackActions {
    pub member: MemberIndex,
    pub actions: Vec<ActionType>,
}

/// Result of locking the bar at a position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarEvaluation {
    /// Lock position after clamping to [0, 1]
    pub position: f64,
    /// One entry per track, in roster order
    pub tracks: Vec<TrackActions>,
}

/// Clamp a lock position into [0, 1]. NaN locks at 0.
pub fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActionBar {
    tracks: Vec<ActionTrack>,
}

impl ActionBar {
    /// Build a bar for the whole roster, downed members included
    ///
    /// Tracks are generated in roster order; each track then passes through
    /// every owned relic in acquisition order.
    pub fn build<R: Rng + ?Sized>(party: &[PartyMember], relics: &[Relic], rng: &mut R) -> Self {
        let tracks = party
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let mut track = ActionTrack::generate(index, member, &mut *rng);
                for &relic in relics {
                    track.segments = apply_relic(relic, member, std::mem::take(&mut track.segments));
                }
                track
            })
            .collect();

        let bar = Self { tracks };
        tracing::debug!(tracks = bar.tracks.len(), relics = relics.len(), "Built action bar");
        bar
    }

    /// Assemble a bar from prepared tracks
    pub fn from_tracks(tracks: Vec<ActionTrack>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &[ActionTrack] {
        &self.tracks
    }

    pub fn track_for(&self, member: MemberIndex) -> Option<&ActionTrack> {
        self.tracks.iter().find(|t| t.member == member)
    }

    /// Lock the bar at `position` and collect every track's actions
    pub fn evaluate(&self, position: f64) -> BarEvaluation {
        let position = clamp_position(position);
        let tracks = self
            .tracks
            .iter()
            .map(|track| TrackActions {
                member: track.member,
                actions: track.actions_at(position),
            })
            .collect();

        BarEvaluation { position, tracks }
    }
}
