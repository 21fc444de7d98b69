//! AnimatedToggle components (config + runtime state)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::ClipRequest;
use crate::interaction::Interactable;

/// Конфиг animated toggle (рычаги, двери, ящики)
///
/// Автоматически добавляет Interactable и ToggleState через Required Components.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
#[require(Interactable, ToggleState)]
pub struct AnimatedToggle {
    /// Forward clip ("open")
    pub animation: Option<String>,
    /// Reverse clip ("close"). Нет — forward проигрывается назад.
    pub reverse_animation: Option<String>,
    /// Toggle mode: активации чередуют forward / reverse
    pub toggle: bool,
    /// Не стартовать, пока player что-то играет
    pub prevent_retrigger: bool,
    /// One-shot: после первой успешной активации enabled = false
    pub one_time: bool,
    /// Флаг FlagStore, без которого активация молча отклоняется
    pub required_flag: Option<String>,
    /// Флаг, выставляемый в true после попытки проиграть clip
    pub set_flag: Option<String>,
    /// Entity с ClipPlayer (None = сам toggle)
    #[serde(skip)]
    pub player: Option<Entity>,
}

impl AnimatedToggle {
    pub fn new(animation: impl Into<String>) -> Self {
        Self {
            animation: Some(animation.into()),
            ..Default::default()
        }
    }

    pub fn toggled(mut self, reverse_animation: Option<&str>) -> Self {
        self.toggle = true;
        self.reverse_animation = reverse_animation.map(str::to_string);
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }

    pub fn prevent_retrigger(mut self) -> Self {
        self.prevent_retrigger = true;
        self
    }

    pub fn requires_flag(mut self, flag: impl Into<String>) -> Self {
        self.required_flag = Some(flag.into());
        self
    }

    pub fn sets_flag(mut self, flag: impl Into<String>) -> Self {
        self.set_flag = Some(flag.into());
        self
    }

    pub fn with_player(mut self, player: Entity) -> Self {
        self.player = Some(player);
        self
    }

    /// Entity, чей ClipPlayer управляет этим toggle
    pub fn player_entity(&self, owner: Entity) -> Entity {
        self.player.unwrap_or(owner)
    }

    /// Какой clip проиграть в этой активации
    ///
    /// - toggle off → forward
    /// - toggle on, `toggled_on == false` → forward
    /// - toggle on, `toggled_on == true` → reverse, иначе forward задом наперёд
    /// - ничего не настроено → None
    pub fn resolve_clip(&self, toggled_on: bool) -> Option<ClipRequest> {
        let forward = self.animation.as_deref().filter(|name| !name.is_empty());
        let reverse = self.reverse_animation.as_deref().filter(|name| !name.is_empty());

        if !self.toggle || !toggled_on {
            return forward.map(ClipRequest::forward);
        }

        if let Some(reverse) = reverse {
            return Some(ClipRequest::forward(reverse));
        }

        forward.map(ClipRequest::backward)
    }
}

/// Runtime state toggle
///
/// Инвариант: `in_flight == Some(name)` ⇒ ClipPlayer сейчас играет `name` для этого toggle.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ToggleState {
    /// Clip, запущенный этим toggle и ещё не доигравший
    pub in_flight: Option<String>,
    /// Флипается на каждой успешной активации в toggle mode
    pub toggled_on: bool,
}
