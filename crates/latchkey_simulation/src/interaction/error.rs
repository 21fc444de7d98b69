//! Configuration errors (missing wiring)
//!
//! Не fatal: система логирует ошибку через `log_error` и деградирует в no-op
//! или в "interaction произошёл, но без визуального эффекта".
//! User-facing rejections (disabled, flag не выставлен, busy) — НЕ ошибки, сюда не попадают.

use bevy::prelude::Entity;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// Pickup без Viewpoint в мире — некуда крепить anchor
    MissingViewpoint { item: Entity },
    /// AnimatedToggle ссылается на entity без ClipPlayer
    MissingClipPlayer { toggle: Entity, player: Entity },
    /// ClipPlayer не знает clip с таким именем
    MissingClip { player: Entity, name: String },
    /// Ни forward, ни reverse clip не настроены
    NoClipConfigured { toggle: Entity },
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionError::MissingViewpoint { item } => {
                write!(f, "pickup {:?}: no Viewpoint in world, inspection cancelled", item)
            }
            InteractionError::MissingClipPlayer { toggle, player } => {
                write!(f, "animated toggle {:?}: entity {:?} has no ClipPlayer", toggle, player)
            }
            InteractionError::MissingClip { player, name } => {
                write!(f, "clip player {:?}: clip '{}' not found", player, name)
            }
            InteractionError::NoClipConfigured { toggle } => {
                write!(f, "animated toggle {:?}: no clip configured for this activation", toggle)
            }
        }
    }
}

impl std::error::Error for InteractionError {}

/// Единая точка репорта configuration errors (diagnostic channel = crate logger)
pub fn report(error: &InteractionError) {
    crate::log_error(&format!("❌ {}", error));
}
