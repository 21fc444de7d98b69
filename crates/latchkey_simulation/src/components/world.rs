//! Probe и scene-graph компоненты: ProbeCollider, Viewpoint, InspectionAnchor

use bevy::prelude::*;

/// Сфера, которую видит probe луч FocusController
///
/// Вешается на interactables и на occluders (стены, мебель).
/// Occluder без `Interactable` блокирует луч, но фокус не получает.
/// `enabled = false` — луч проходит насквозь (pickup выключает collision так).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ProbeCollider {
    pub radius: f32,
    pub enabled: bool,
}

impl Default for ProbeCollider {
    fn default() -> Self {
        Self::sphere(0.5)
    }
}

impl ProbeCollider {
    pub fn sphere(radius: f32) -> Self {
        Self {
            radius,
            enabled: true,
        }
    }
}

/// Marker: камера/точка зрения актора
///
/// Pickup крепит inspection anchor к Viewpoint актора (child актора), без
/// такого — к первому найденному. Нет Viewpoint в мире — pickup отказывает
/// (configuration error).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Viewpoint;

/// Marker: anchor, к которому прикреплён рассматриваемый предмет
///
/// Spawn как child Viewpoint при pickup, despawn (вместе с предметом) при store.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct InspectionAnchor;
