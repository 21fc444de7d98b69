//! Scene changer — дверь/портал в другую сцену
//!
//! Загрузку сцены и переходный эффект делает хост по `SceneChangeRequested`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::SurfaceAppearance;
use crate::flags::FlagStore;
use crate::interaction::{
    highlight, InteractRequested, Interactable, InteractionSettings, InteractionSignals, SceneChangeRequested,
};

/// Переход в `target_scene` (опционально гейт по флагу)
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[require(Interactable)]
pub struct SceneChanger {
    pub target_scene: String,
    pub required_flag: Option<String>,
}

impl SceneChanger {
    pub fn new(target_scene: impl Into<String>) -> Self {
        Self {
            target_scene: target_scene.into(),
            required_flag: None,
        }
    }

    pub fn requires_flag(mut self, flag: impl Into<String>) -> Self {
        self.required_flag = Some(flag.into());
        self
    }
}

/// Система: активация scene changer
///
/// - disabled → rejection через base interact
/// - required_flag не выставлен → silent no-op
/// - иначе base interact, SceneChangeRequested, enabled = false (второй раз не сработает)
pub fn process_scene_changers(
    mut requests: EventReader<InteractRequested>,
    mut changers: Query<(&mut Interactable, &SceneChanger, Option<&mut SurfaceAppearance>)>,
    flags: Res<FlagStore>,
    mut signals: InteractionSignals,
    mut scene_requests: EventWriter<SceneChangeRequested>,
    settings: Res<InteractionSettings>,
) {
    for request in requests.read() {
        let entity = request.target;
        let Ok((mut interactable, changer, mut surface)) = changers.get_mut(entity) else {
            continue;
        };

        if !interactable.enabled {
            signals.base_interact(entity, &interactable, request.actor);
            settings.trace_rejection(&format!("{:?}: scene change rejected (disabled)", entity));
            continue;
        }

        if let Some(flag) = &changer.required_flag {
            if !flags.get(flag) {
                settings.trace_rejection(&format!(
                    "{:?}: scene change rejected (flag '{}' not set)",
                    entity, flag
                ));
                continue;
            }
        }

        signals.base_interact(entity, &interactable, request.actor);

        scene_requests.write(SceneChangeRequested {
            source: entity,
            requested_by: request.actor,
            target_scene: changer.target_scene.clone(),
        });
        highlight::disable(&mut interactable, surface.as_deref_mut());

        crate::log_info(&format!(
            "🚪 {:?} → scene '{}' (via {:?})",
            request.actor, changer.target_scene, entity
        ));
    }
}
