//! Action bar engine
//!
//! Every party member gets a track: a timeline over [0, 1] split into
//! Attack, Skill and Rest segments. A combat turn locks a single position on
//! the bar and every segment under that position fires.
//!
//! Tracks are rebuilt from scratch each turn, then relics get a chance to
//! reshape them. Relic-widened segments may overlap, so one position can
//! fire several segments of the same track.

pub mod bar;
pub mod constants;
pub mod segment;
pub mod track;

pub use bar::{clamp_position, ActionBar, BarEvaluation, TrackActions};
pub use constants::*;
pub use segment::{ActionSegment, ActionType};
pub use track::{partition_unit_interval, ActionTrack};
