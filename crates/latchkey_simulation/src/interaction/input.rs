//! Player input boundary
//!
//! ```text
//! Host input (keyboard/mouse)
//!     ↓
//! PlayerInput (ECS event)
//!     ↓
//! handle_inspection_input  — забирает ВСЁ, пока предмет рассматривается
//!     ↓
//! dispatch_interact_trigger — Interact → InteractRequested на focused entity
//! ```
//!
//! "Consumed" input помечается в `ConsumedInput` (по EventId), последующие
//! обработчики в этом тике его пропускают.

use bevy::ecs::event::EventId;
use bevy::prelude::*;
use std::collections::HashSet;

/// Дискретные кнопки (кроме trigger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputButton {
    Primary,
    Secondary,
    Cancel,
}

/// Player input event (один на каждое действие игрока)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Trigger: "использовать" (E / LMB)
    Interact,
    /// Pointer motion (пиксели): x → yaw, y → pitch
    PointerMotion(Vec2),
    /// Любая другая дискретная кнопка
    Button(InputButton),
}

impl PlayerInput {
    pub fn is_discrete(&self) -> bool {
        !matches!(self, PlayerInput::PointerMotion(_))
    }
}

/// Id событий, уже обработанных в текущем тике
#[derive(Resource, Debug, Default)]
pub struct ConsumedInput {
    ids: HashSet<usize>,
}

impl ConsumedInput {
    pub fn mark(&mut self, id: EventId<PlayerInput>) {
        self.ids.insert(id.id);
    }

    pub fn contains(&self, id: EventId<PlayerInput>) -> bool {
        self.ids.contains(&id.id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Кто сейчас захватил input (inspected предмет)
#[derive(Resource, Debug, Default)]
pub struct InputCapture {
    pub captured_by: Option<Entity>,
}

/// Система: сброс consumed ids в начале тика
pub fn clear_consumed_input(mut consumed: ResMut<ConsumedInput>) {
    consumed.clear();
}
