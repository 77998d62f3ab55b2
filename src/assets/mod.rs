//! Asset lookup tables used by front ends

pub mod atlas;

pub use atlas::{AtlasError, SpriteAtlas};
