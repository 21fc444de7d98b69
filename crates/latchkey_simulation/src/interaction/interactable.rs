//! Interactable — базовый контракт interaction (enable flag + highlight state)
//!
//! Специализации (Pickupable, AnimatedToggle, SceneChanger) — отдельные
//! компоненты рядом с `Interactable`, а не наследники. Общая логика:
//! - highlight/cache → `interaction::highlight`
//! - base interact (signal + sound / rejection) → `InteractionSignals::base_interact`

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{Appearance, HighlightStyle};
use crate::interaction::events::{InteractRequested, Interacted, InteractionRejected, PlaySound};
use crate::interaction::settings::InteractionSettings;
use crate::pickup::Pickupable;
use crate::scene_change::SceneChanger;
use crate::toggle::AnimatedToggle;

/// Объект, с которым можно взаимодействовать
///
/// Инвариант: `highlighted ⇒ enabled` (никогда не подсвечиваем то, что нельзя использовать).
/// `cached_override` заполнен только пока `highlighted == true`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Interactable {
    /// Гейт и для подсветки, и для interact. Сбрасывается в true только владельцем.
    pub enabled: bool,
    /// Подсвечен ли сейчас (выставляется только через highlight helpers)
    pub highlighted: bool,
    /// Surface override до подсветки (`None` = override не было)
    pub cached_override: Option<Appearance>,
    pub highlight: HighlightStyle,
    /// Звук на принятый interact (audio boundary)
    pub sound: Option<String>,
}

impl Default for Interactable {
    fn default() -> Self {
        Self {
            enabled: true,
            highlighted: false,
            cached_override: None,
            highlight: HighlightStyle::default(),
            sound: None,
        }
    }
}

impl Interactable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightStyle) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Сигналы base interact, сгруппированные в один SystemParam
#[derive(SystemParam)]
pub struct InteractionSignals<'w> {
    interacted: EventWriter<'w, Interacted>,
    rejected: EventWriter<'w, InteractionRejected>,
    sounds: EventWriter<'w, PlaySound>,
}

impl InteractionSignals<'_> {
    /// Base interact
    ///
    /// - `enabled == false` → `InteractionRejected`, возвращает false
    /// - иначе → `Interacted` (+ `PlaySound` если настроен), возвращает true
    pub fn base_interact(&mut self, entity: Entity, interactable: &Interactable, actor: Entity) -> bool {
        if !interactable.enabled {
            self.rejected.write(InteractionRejected { entity, actor });
            return false;
        }

        self.interacted.write(Interacted { entity, actor });
        if let Some(sound) = &interactable.sound {
            self.sounds.write(PlaySound {
                source: entity,
                sound: sound.clone(),
            });
        }

        true
    }
}

/// Система: interact для "голых" Interactable (без специализированного поведения)
///
/// Только base interact: сигнал + звук. Используется для кнопок/табличек,
/// чья логика целиком в listeners `Interacted`.
pub fn process_plain_interactions(
    mut requests: EventReader<InteractRequested>,
    interactables: Query<
        &Interactable,
        (Without<Pickupable>, Without<AnimatedToggle>, Without<SceneChanger>),
    >,
    mut signals: InteractionSignals,
    settings: Res<InteractionSettings>,
) {
    for request in requests.read() {
        let Ok(interactable) = interactables.get(request.target) else {
            continue;
        };

        if signals.base_interact(request.target, interactable, request.actor) {
            crate::log(&format!("🖐️ {:?} interacted with {:?}", request.actor, request.target));
        } else {
            settings.trace_rejection(&format!("{:?}: interact rejected (disabled)", request.target));
        }
    }
}
