//! AnimatedToggle systems: activation guards, completion tracking

use bevy::prelude::*;
use std::collections::HashMap;

use crate::animation::{ClipFinished, ClipPlayer};
use crate::components::SurfaceAppearance;
use crate::flags::FlagStore;
use crate::interaction::error::{self, InteractionError};
use crate::interaction::{highlight, InteractRequested, Interactable, InteractionSettings, InteractionSignals};
use crate::toggle::components::{AnimatedToggle, ToggleState};

/// Система: активация animated toggle
///
/// Guards по порядку (первый провал — выход):
/// 1. disabled → rejection через base interact
/// 2. required_flag не выставлен → silent no-op
/// 3. prevent_retrigger и player что-то играет → silent no-op
///
/// Дальше: base interact (сигнал + звук), resolve clip, play, flip toggled_on,
/// set_flag, one_time → disable. Нет clip'а — interact засчитан, шаги play/flip/set_flag пропущены.
///
/// Player общий у нескольких toggles (`with_player`): новый clip вытесняет
/// старый без ClipFinished, поэтому `in_flight` остальных toggles этого player
/// сбрасывается в конце системы.
pub fn process_toggle_interactions(
    mut requests: EventReader<InteractRequested>,
    mut toggles: Query<(
        Entity,
        &mut Interactable,
        &AnimatedToggle,
        &mut ToggleState,
        Option<&mut SurfaceAppearance>,
    )>,
    mut players: Query<&mut ClipPlayer>,
    mut flags: ResMut<FlagStore>,
    mut signals: InteractionSignals,
    settings: Res<InteractionSettings>,
) {
    // player → toggle, последним запустивший clip
    let mut started: HashMap<Entity, Entity> = HashMap::new();

    for request in requests.read() {
        let entity = request.target;
        let Ok((_, mut interactable, toggle, mut state, mut surface)) = toggles.get_mut(entity) else {
            continue;
        };

        // 1. Enabled guard (rejection path)
        if !interactable.enabled {
            signals.base_interact(entity, &interactable, request.actor);
            settings.trace_rejection(&format!("{:?}: toggle rejected (disabled)", entity));
            continue;
        }

        // 2. Flag guard
        if let Some(flag) = &toggle.required_flag {
            if !flags.get(flag) {
                settings.trace_rejection(&format!("{:?}: toggle rejected (flag '{}' not set)", entity, flag));
                continue;
            }
        }

        // 3. Busy guard
        let player_entity = toggle.player_entity(entity);
        if toggle.prevent_retrigger {
            let busy = players.get(player_entity).map(|player| player.is_playing()).unwrap_or(false);
            if busy {
                settings.trace_rejection(&format!("{:?}: toggle rejected (player busy)", entity));
                continue;
            }
        }

        // Base interact ДО state transition (сигнал/звук идут первыми)
        signals.base_interact(entity, &interactable, request.actor);

        // 4. Resolve clip
        match toggle.resolve_clip(state.toggled_on) {
            Some(clip) => {
                // 5-6. Play + in_flight
                match players.get_mut(player_entity) {
                    Ok(mut player) => match player.play(player_entity, &clip) {
                        Ok(()) => {
                            crate::log(&format!(
                                "🚪 {:?} playing '{}' (rate {})",
                                entity, clip.name, clip.rate
                            ));
                            state.in_flight = Some(clip.name.clone());
                            started.insert(player_entity, entity);
                        }
                        Err(err) => error::report(&err),
                    },
                    Err(_) => error::report(&InteractionError::MissingClipPlayer {
                        toggle: entity,
                        player: player_entity,
                    }),
                }

                // 7. Toggle flip
                if toggle.toggle {
                    state.toggled_on = !state.toggled_on;
                }

                // 8. Set flag (после любой попытки play)
                if let Some(flag) = &toggle.set_flag {
                    flags.set(flag.clone(), true);
                }
            }
            None => error::report(&InteractionError::NoClipConfigured { toggle: entity }),
        }

        // 9. One-shot
        if toggle.one_time {
            highlight::disable(&mut interactable, surface.as_deref_mut());
            crate::log(&format!("🔒 {:?} one-shot toggle used up", entity));
        }
    }

    if started.is_empty() {
        return;
    }

    for (entity, _, toggle, mut state, _) in toggles.iter_mut() {
        let Some(&owner) = started.get(&toggle.player_entity(entity)) else {
            continue;
        };
        if owner != entity && state.in_flight.is_some() {
            crate::log(&format!("🚪 {:?} clip replaced by {:?}", entity, owner));
            state.in_flight = None;
        }
    }
}

/// Система: completion callback от clip player
///
/// Имя совпадает с `in_flight` → очищаем. Чужие clip'ы игнорируем
/// (их запустил не этот toggle).
pub fn track_toggle_completions(
    mut finished: EventReader<ClipFinished>,
    mut toggles: Query<(Entity, &AnimatedToggle, &mut ToggleState)>,
) {
    for event in finished.read() {
        for (entity, toggle, mut state) in toggles.iter_mut() {
            if toggle.player_entity(entity) != event.player {
                continue;
            }
            if state.in_flight.as_deref() == Some(event.name.as_str()) {
                state.in_flight = None;
            }
        }
    }
}
