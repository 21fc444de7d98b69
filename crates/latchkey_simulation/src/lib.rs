//! LATCHKEY Simulation Core
//!
//! First-person interaction ядро на Bevy 0.16 (headless ECS)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = interaction rules (focus, pickup/inspect/store, toggles, puzzle flags)
//! - Хост (движок) = physics, rendering, audio, scene loading
//!
//! Связь с хостом только через компоненты (`Transform`, `ProbeCollider`,
//! `SurfaceAppearance`, `ClipPlayer`) и события (`PlayerInput`, `PlaySound`,
//! `SceneChangeRequested`, ...).

use bevy::prelude::*;
use bevy::transform::TransformPlugin;

// Публичные модули
pub mod animation;
pub mod components;
pub mod flags;
pub mod focus;
pub mod interaction;
pub mod logger;
pub mod pickup;
pub mod scene_change;
pub mod toggle;

// Re-export базовых типов для удобства
pub use animation::{ClipFinished, ClipPlayer, ClipRequest};
pub use components::*;
pub use flags::FlagStore;
pub use focus::{set_focus_active, FocusController, SetFocusActive, DEFAULT_PROBE_RANGE};
pub use interaction::{
    FocusChanged, InputButton, InteractRequested, Interactable, Interacted, InteractionError, InteractionPlugin,
    InteractionRejected, InteractionSettings, ItemStored, PlayerInput, PlaySound, SceneChangeRequested,
    StoreRequested,
};
pub use logger::*;
pub use pickup::{PickupState, Pickupable};
pub use scene_change::SceneChanger;
pub use toggle::{AnimatedToggle, ToggleState};

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    /// None → `InteractionSettings::default()`
    pub settings: Option<InteractionSettings>,
}

impl SimulationPlugin {
    pub fn with_settings(settings: InteractionSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Настройки до InteractionPlugin: init_resource не перезапишет
        if let Some(settings) = &self.settings {
            app.insert_resource(settings.clone());
        }

        app.add_plugins(InteractionPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// `TransformPlugin` держит `GlobalTransform` актуальным для хоста
/// (предмет под inspection anchor, вложенные interactables).
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin, SimulationPlugin::default()));

    app
}
