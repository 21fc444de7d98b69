//! Pickup components: Pickupable (config), PickupState (FSM), Inspection (runtime)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::components::ProbeCollider;
use crate::interaction::Interactable;

/// Default время блокировки input после pickup (секунды)
pub const DEFAULT_INSPECTION_LOCK_SECS: f32 = 0.5;

/// Конфиг предмета, который можно поднять и рассмотреть
///
/// Автоматически добавляет Interactable, PickupState, ProbeCollider через Required Components.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[require(Interactable, PickupState, ProbeCollider)]
pub struct Pickupable {
    /// Название (попадает в Inventory)
    pub name: String,
    pub description: String,
    /// Расстояние anchor'а перед Viewpoint (метры)
    pub inspect_distance: f32,
    /// Scale предмета во время inspect
    pub zoom: f32,
    /// Сколько секунд после pickup input игнорируется (кроме pointer motion)
    pub lock_duration_secs: f32,
    /// Флаг FlagStore, выставляемый при store (например "has_key")
    pub stored_flag: Option<String>,
}

impl Default for Pickupable {
    fn default() -> Self {
        Self {
            name: "item".to_string(),
            description: String::new(),
            inspect_distance: 0.6,
            zoom: 1.0,
            lock_duration_secs: DEFAULT_INSPECTION_LOCK_SECS,
            stored_flag: None,
        }
    }
}

impl Pickupable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stored_flag(mut self, flag: impl Into<String>) -> Self {
        self.stored_flag = Some(flag.into());
        self
    }

    pub fn with_lock_duration(mut self, secs: f32) -> Self {
        self.lock_duration_secs = secs.max(0.0);
        self
    }
}

/// Pickup FSM состояния (только вперёд: InWorld → BeingViewed → Stored)
///
/// Holder живёт внутри `BeingViewed`, поэтому `holder != None ⇔ BeingViewed` по построению.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub enum PickupState {
    /// Лежит в мире — начальное состояние
    #[default]
    InWorld,

    /// Рассматривается: прикреплён к anchor перед Viewpoint
    BeingViewed {
        /// Кто держит
        holder: Entity,
        /// Откуда забрали (bookkeeping, обратно не возвращаем)
        original_parent: Option<Entity>,
    },

    /// Сложен — terminal, entity уничтожается в конце тика
    Stored,
}

impl PickupState {
    pub fn holder(&self) -> Option<Entity> {
        match self {
            PickupState::BeingViewed { holder, .. } => Some(*holder),
            _ => None,
        }
    }

    pub fn is_being_viewed(&self) -> bool {
        matches!(self, PickupState::BeingViewed { .. })
    }
}

/// Runtime inspection данные (есть только пока BeingViewed/Stored)
///
/// Lock: выставлен при pickup, снимается ровно один раз по истечении таймера.
#[derive(Component, Debug, Clone)]
pub struct Inspection {
    /// Anchor, к которому прикреплён предмет (despawn вместе с предметом)
    pub anchor: Entity,
    pub locked: bool,
    pub lock_timer: Timer,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
}

impl Inspection {
    pub fn new(anchor: Entity, pickup: &Pickupable) -> Self {
        Self {
            anchor,
            locked: true,
            lock_timer: Timer::from_seconds(pickup.lock_duration_secs.max(0.0), TimerMode::Once),
            yaw: 0.0,
            pitch: 0.0,
            zoom: pickup.zoom,
        }
    }

    /// Продвинуть lock timer; true ровно в тот тик, когда lock снят
    pub fn tick_lock(&mut self, delta: Duration) -> bool {
        if !self.locked {
            return false;
        }

        self.lock_timer.tick(delta);
        if self.lock_timer.finished() {
            self.locked = false;
            return true;
        }

        false
    }

    /// Pointer motion → yaw (x) / pitch (y)
    pub fn rotate(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw += delta.x * sensitivity;
        self.pitch += delta.y * sensitivity;
    }

    /// Локальная ориентация предмета на anchor
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Локальный transform предмета на anchor
    pub fn local_transform(&self) -> Transform {
        Transform::from_rotation(self.orientation()).with_scale(Vec3::splat(self.zoom))
    }
}
