//! Action segments: tagged sub-intervals of a track

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a party member does when one of their segments fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Attack,
    Skill,
    Rest,
}

impl ActionType {
    pub const ALL: [ActionType; 3] = [ActionType::Attack, ActionType::Skill, ActionType::Rest];
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Attack => write!(f, "Attack"),
            ActionType::Skill => write!(f, "Skill"),
            ActionType::Rest => write!(f, "Rest"),
        }
    }
}

/// A closed interval `[start, end]` of the bar tagged with an action
///
/// A matched segment repeats its action `stack` times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActionSegment {
    pub start: f64,
    pub end: f64,
    pub action: ActionType,
    pub stack: u32,
}

impl ActionSegment {
    pub fn new(start: f64, end: f64, action: ActionType) -> Self {
        Self::stacked(start, end, action, 1)
    }

    pub fn stacked(start: f64, end: f64, action: ActionType, stack: u32) -> Self {
        debug_assert!(start < end, "segment start {start} must precede end {end}");
        debug_assert!(stack >= 1);
        Self {
            start,
            end,
            action,
            stack,
        }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Boundaries are inclusive: a position on a shared edge matches both
    /// neighbouring segments.
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position <= self.end
    }

    /// The segment's action repeated `stack` times
    pub fn expand(&self) -> impl Iterator<Item = ActionType> {
        std::iter::repeat(self.action).take(self.stack as usize)
    }
}

impl fmt::Display for ActionSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{:.0}%-{:.0}%]",
            self.action,
            self.start * 100.0,
            self.end * 100.0
        )?;
        if self.stack > 1 {
            write!(f, " x{}", self.stack)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let segment = ActionSegment::new(0.25, 0.5, ActionType::Skill);
        assert!(segment.contains(0.25));
        assert!(segment.contains(0.5));
        assert!(segment.contains(0.4));
        assert!(!segment.contains(0.2));
        assert!(!segment.contains(0.51));
    }

    #[test]
    fn test_expand_repeats_by_stack() {
        let segment = ActionSegment::stacked(0.0, 0.3, ActionType::Attack, 3);
        let actions: Vec<_> = segment.expand().collect();
        assert_eq!(actions, vec![ActionType::Attack; 3]);
    }

    #[test]
    fn test_display() {
        let segment = ActionSegment::stacked(0.1, 0.45, ActionType::Attack, 2);
        assert_eq!(segment.to_string(), "Attack [10%-45%] x2");
        let segment = ActionSegment::new(0.45, 1.0, ActionType::Rest);
        assert_eq!(segment.to_string(), "Rest [45%-100%]");
    }
}
