//! Action bar geometry

/// Narrowest a freshly generated segment may be
pub const MIN_SEGMENT_WIDTH: f64 = 0.05;

/// How far Overlap Charm pulls an Attack segment's start to the left
pub const OVERLAP_CHARM_LEAD: f64 = 0.05;

/// How far Overlap Charm pushes an Attack segment's end to the right
pub const OVERLAP_CHARM_TRAIL: f64 = 0.08;
