//! Encounters offered between fights and the one currently being played

pub mod event;
pub mod options;

pub use event::{resolve_event, EventOutcome, SHOP_MESSAGE};
pub use options::{generate_options, EncounterOption, EncounterType, OPTION_COUNT};

use serde::Serialize;

use crate::entity::{Enemy, EnemyKind};

/// The encounter in progress
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Encounter {
    #[default]
    None,
    Enemy { enemy: Enemy, kind: EnemyKind },
}

impl Encounter {
    pub fn fight(kind: EnemyKind, enemy: Enemy) -> Self {
        Self::Enemy { enemy, kind }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        match self {
            Self::None => None,
            Self::Enemy { enemy, .. } => Some(enemy),
        }
    }

    pub fn kind(&self) -> Option<EnemyKind> {
        match self {
            Self::None => None,
            Self::Enemy { kind, .. } => Some(*kind),
        }
    }
}
