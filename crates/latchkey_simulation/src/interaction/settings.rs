//! InteractionSettings — глобальные параметры interaction layer

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Глобальная конфигурация (resource)
///
/// Per-entity параметры живут в config компонентах (`Pickupable`, `AnimatedToggle`).
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Радианы поворота inspected предмета на 1 пиксель pointer motion
    pub pointer_sensitivity: f32,
    /// Логировать silent rejections (disabled, flag, busy) на debug уровне
    pub log_rejections: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            pointer_sensitivity: 0.005,
            log_rejections: false,
        }
    }
}

impl InteractionSettings {
    /// Debug лог для user-facing rejection (по умолчанию выключен, чтобы не спамить)
    pub fn trace_rejection(&self, message: &str) {
        if self.log_rejections {
            crate::log(message);
        }
    }
}
