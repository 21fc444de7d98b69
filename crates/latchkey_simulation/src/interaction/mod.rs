//! Interaction module — protocol ядро
//!
//! FocusController (probe) → InteractRequested → behavior системы → FlagStore.
//! Связь однонаправленная: controller → entity, entity → store.
//! Никто не вызывает controller обратно.

use bevy::prelude::*;

pub mod error;
pub mod events;
pub mod highlight;
pub mod input;
pub mod interactable;
pub mod settings;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod highlight_tests;

// Re-exports
pub use error::InteractionError;
pub use events::*;
pub use input::{ConsumedInput, InputButton, InputCapture, PlayerInput};
pub use interactable::{Interactable, InteractionSignals};
pub use settings::InteractionSettings;

use crate::animation::{self, ClipFinished};
use crate::flags::FlagStore;
use crate::{focus, pickup, scene_change, toggle};

/// Interaction Plugin
///
/// Регистрирует все interaction системы в Update (input приходит per-frame).
/// Порядок выполнения внутри одного тика:
/// 1. clear_consumed_input — новый тик, consumed ids сброшены
/// 2. handle_inspection_input — inspected предмет забирает input первым
/// 3. update_focus — probe + unfocus old → focus new
/// 4. dispatch_interact_trigger — trigger → InteractRequested
/// 5. behavior системы (plain / pickup / toggle / scene changer)
/// 6. tick_inspection_locks — inspection lock timers
/// 7. advance_clip_players → track_toggle_completions
/// 8. store_pickups → listeners (flags, inventory) → despawn_stored_pickups
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        // FlagStore может быть вставлен хостом заранее (shared между системами сцены)
        app.init_resource::<FlagStore>()
            .init_resource::<InteractionSettings>()
            .init_resource::<ConsumedInput>()
            .init_resource::<InputCapture>();

        // Регистрация событий
        app.add_event::<PlayerInput>()
            .add_event::<InteractRequested>()
            .add_event::<Interacted>()
            .add_event::<InteractionRejected>()
            .add_event::<FocusChanged>()
            .add_event::<PlaySound>()
            .add_event::<StoreRequested>()
            .add_event::<ItemStored>()
            .add_event::<SceneChangeRequested>()
            .add_event::<ClipFinished>();

        app.add_systems(
            Update,
            (
                // Фаза 1: Input + focus
                (
                    input::clear_consumed_input,
                    pickup::handle_inspection_input,
                    focus::update_focus,
                    focus::dispatch_interact_trigger,
                )
                    .chain(),
                // Фаза 2: Behaviors (каждая система фильтрует свои entity)
                (
                    interactable::process_plain_interactions,
                    pickup::process_pickup_interactions,
                    toggle::process_toggle_interactions,
                    scene_change::process_scene_changers,
                )
                    .chain(),
                // Фаза 3: Асинхронные продолжения (timers, animation completion)
                (
                    pickup::tick_inspection_locks,
                    animation::advance_clip_players,
                    toggle::track_toggle_completions,
                )
                    .chain(),
                // Фаза 4: Store + cleanup
                (
                    pickup::store_pickups,
                    pickup::raise_flags_on_store,
                    pickup::collect_stored_items,
                    pickup::despawn_stored_pickups,
                )
                    .chain(),
            )
                .chain(), // Последовательное выполнение: порядок внутри тика гарантирован
        );
    }
}
