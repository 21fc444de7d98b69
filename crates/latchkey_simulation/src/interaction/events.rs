//! Interaction Events — сигналы interaction layer
//!
//! Intent events (кто-то просит действие):
//! - `InteractRequested` — FocusController → behavior системы
//! - `StoreRequested` — inspection input → store_pickups
//!
//! Notification events (что-то произошло, слушают UI/audio/puzzle wiring):
//! - `Interacted`, `InteractionRejected`, `FocusChanged`, `ItemStored`,
//!   `SceneChangeRequested`, `PlaySound`

use bevy::prelude::*;

/// Intent: actor активировал focused entity
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractRequested {
    pub target: Entity,
    pub actor: Entity,
}

/// Base interact принят (enabled == true)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interacted {
    pub entity: Entity,
    pub actor: Entity,
}

/// Base interact отклонён (enabled == false)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionRejected {
    pub entity: Entity,
    pub actor: Entity,
}

/// Фокус controller'а сменился (`focus: None` — фокуса больше нет)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChanged {
    pub controller: Entity,
    pub focus: Option<Entity>,
}

/// Audio boundary: проиграть звук (один раз на принятый base interact)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PlaySound {
    pub source: Entity,
    pub sound: String,
}

/// Intent: сложить рассматриваемый предмет
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreRequested {
    pub item: Entity,
    pub actor: Entity,
}

/// Предмет сложен. Entity ещё жив в этом тике (listeners читают его данные),
/// despawn происходит в конце тика.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStored {
    pub item: Entity,
    pub actor: Entity,
}

/// Scene changer сработал, хост должен загрузить `target_scene`
///
/// После этого события текущая сцена может быть уничтожена целиком.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SceneChangeRequested {
    pub source: Entity,
    pub requested_by: Entity,
    pub target_scene: String,
}
