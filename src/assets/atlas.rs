//! Biome to sprite path lookup
//!
//! The atlas is a JSON document:
//!
//! ```json
//! { "default": "sprites/unknown.png", "biomes": { "ocean": "sprites/ocean.png" } }
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Sprite atlas document is empty")]
    Empty,

    #[error("Failed to parse sprite atlas: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sprite atlas defines no biomes")]
    NoBiomes,

    #[error("Failed to read sprite atlas: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteAtlas {
    /// Sprite used for biomes missing from the table
    default: String,
    biomes: AHashMap<String, String>,
}

impl SpriteAtlas {
    /// Parse an atlas document
    pub fn from_json(content: &str) -> Result<Self, AtlasError> {
        if content.trim().is_empty() {
            return Err(AtlasError::Empty);
        }

        let atlas: SpriteAtlas = serde_json::from_str(content)?;
        if atlas.biomes.is_empty() {
            return Err(AtlasError::NoBiomes);
        }

        tracing::debug!(biomes = atlas.biomes.len(), "Loaded sprite atlas");
        Ok(atlas)
    }

    /// Load an atlas document from disk
    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Sprite path for a biome, or the default when it is not mapped
    pub fn sprite_for(&self, biome: &str) -> &str {
        self.biomes.get(biome).map_or(self.default.as_str(), String::as_str)
    }

    pub fn default_sprite(&self) -> &str {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}
