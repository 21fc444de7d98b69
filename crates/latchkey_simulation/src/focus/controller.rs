//! FocusController component + immediate (de)activation

use bevy::prelude::*;

use crate::components::SurfaceAppearance;
use crate::interaction::{highlight, FocusChanged, Interactable};

/// Default длина probe луча (метры)
pub const DEFAULT_PROBE_RANGE: f32 = 2.5;

/// Focus-tracking controller (вешается на актора)
///
/// Probe идёт из `Transform` актора вдоль forward (-Z).
/// Инвариант: фокус — либо ничего, либо ровно один enabled entity в пределах probe.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct FocusController {
    /// false → фокус снят и probe не работает
    pub active: bool,
    /// Weak reference: entity может быть уничтожен (store), проверяем при каждом использовании
    pub current_focus: Option<Entity>,
    /// Длина probe луча
    pub range: f32,
}

impl Default for FocusController {
    fn default() -> Self {
        Self {
            active: true,
            current_focus: None,
            range: DEFAULT_PROBE_RANGE,
        }
    }
}

impl FocusController {
    pub fn with_range(range: f32) -> Self {
        Self {
            range,
            ..Default::default()
        }
    }
}

/// Включить/выключить controller немедленно (без ожидания следующего тика)
///
/// `active = false` атомарно: unfocus текущего фокуса + clear + `FocusChanged(None)`.
/// `active = true` — probe возобновится на следующем тике.
pub fn set_focus_active(world: &mut World, controller: Entity, active: bool) {
    let previous = {
        let Some(mut focus) = world.get_mut::<FocusController>(controller) else {
            crate::log_warning(&format!("set_focus_active: {:?} has no FocusController", controller));
            return;
        };
        focus.active = active;
        if active {
            return;
        }
        focus.current_focus.take()
    };

    let Some(previous) = previous else {
        return;
    };

    let mut interactables = world.query::<(&mut Interactable, Option<&mut SurfaceAppearance>)>();
    if let Ok((mut interactable, mut surface)) = interactables.get_mut(world, previous) {
        highlight::unfocus(&mut interactable, surface.as_deref_mut());
    }

    world.send_event(FocusChanged {
        controller,
        focus: None,
    });
    crate::log(&format!("🎯 {:?} focus controller deactivated, focus on {:?} dropped", controller, previous));
}

/// Command-обёртка над `set_focus_active` (для систем с `Commands`)
#[derive(Debug, Clone, Copy)]
pub struct SetFocusActive {
    pub controller: Entity,
    pub active: bool,
}

impl Command for SetFocusActive {
    fn apply(self, world: &mut World) {
        set_focus_active(world, self.controller, self.active);
    }
}
