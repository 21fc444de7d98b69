//! Focus systems: probe → focus transitions, trigger dispatch

use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;

use crate::components::{ProbeCollider, SurfaceAppearance};
use crate::focus::controller::FocusController;
use crate::focus::probe;
use crate::interaction::{
    highlight, ConsumedInput, FocusChanged, InteractRequested, Interactable, PlayerInput,
};

/// Система: probe + focus transitions (каждый тик)
///
/// 1. Validity check: focused entity мог быть уничтожен → сбрасываем ссылку
/// 2. Probe: ближайший enabled ProbeCollider на луче (world space: позы
///    считаются по цепочке `ChildOf` в этом же тике, без ожидания propagation)
/// 3. Candidate = hit если у него enabled Interactable, иначе None
/// 4. Candidate != current → unfocus old, assign, focus new, FocusChanged
///
/// Порядок unfocus-old → focus-new обязателен: appearance cache валиден
/// максимум у одного entity.
pub fn update_focus(
    mut controllers: Query<(Entity, &mut FocusController)>,
    colliders: Query<(Entity, &ProbeCollider)>,
    transforms: TransformHelper,
    mut interactables: Query<(&mut Interactable, Option<&mut SurfaceAppearance>)>,
    mut focus_changed: EventWriter<FocusChanged>,
) {
    for (controller_entity, mut controller) in controllers.iter_mut() {
        // Weak reference: entity despawned → просто забываем (unfocus некому делать)
        if let Some(focus) = controller.current_focus {
            if !interactables.contains(focus) {
                controller.current_focus = None;
                focus_changed.write(FocusChanged {
                    controller: controller_entity,
                    focus: None,
                });
                crate::log(&format!("🎯 {:?} focus target {:?} no longer exists", controller_entity, focus));
            }
        }

        if !controller.active {
            // `active` выставлен напрямую в компонент (не через set_focus_active) — догоняем здесь
            if let Some(old) = controller.current_focus.take() {
                if let Ok((mut interactable, mut surface)) = interactables.get_mut(old) {
                    highlight::unfocus(&mut interactable, surface.as_deref_mut());
                }
                focus_changed.write(FocusChanged {
                    controller: controller_entity,
                    focus: None,
                });
            }
            continue;
        }

        let Ok(eye) = transforms.compute_global_transform(controller_entity) else {
            continue;
        };

        let hit = probe::cast_ray(
            eye.translation(),
            eye.forward().as_vec3(),
            controller.range,
            colliders
                .iter()
                .filter(|(entity, collider)| *entity != controller_entity && collider.enabled)
                .filter_map(|(entity, collider)| {
                    let center = transforms.compute_global_transform(entity).ok()?.translation();
                    Some((entity, center, collider.radius))
                }),
        );

        let candidate = hit.map(|hit| hit.entity).filter(|entity| {
            interactables
                .get(*entity)
                .map(|(interactable, _)| interactable.enabled)
                .unwrap_or(false)
        });

        if candidate == controller.current_focus {
            continue;
        }

        // 1. Unfocus old
        if let Some(old) = controller.current_focus {
            if let Ok((mut interactable, mut surface)) = interactables.get_mut(old) {
                highlight::unfocus(&mut interactable, surface.as_deref_mut());
            }
        }

        // 2. Assign
        controller.current_focus = candidate;

        // 3. Focus new
        if let Some(new) = candidate {
            if let Ok((mut interactable, mut surface)) = interactables.get_mut(new) {
                highlight::focus(&mut interactable, surface.as_deref_mut());
            }
        }

        focus_changed.write(FocusChanged {
            controller: controller_entity,
            focus: candidate,
        });
        crate::log(&format!("🎯 {:?} focus → {:?}", controller_entity, candidate));
    }
}

/// Система: trigger → InteractRequested на focused entity
///
/// Input помечается consumed ДО отправки запроса: interact может уничтожить
/// текущий scene context, после запроса ничего не предполагает, что target жив.
/// Нет фокуса — trigger молча игнорируется.
pub fn dispatch_interact_trigger(
    mut inputs: EventReader<PlayerInput>,
    mut consumed: ResMut<ConsumedInput>,
    controllers: Query<(Entity, &FocusController)>,
    interactables: Query<(), With<Interactable>>,
    mut requests: EventWriter<InteractRequested>,
) {
    for (input, id) in inputs.read_with_id() {
        if !matches!(input, PlayerInput::Interact) || consumed.contains(id) {
            continue;
        }

        for (actor, controller) in controllers.iter() {
            if !controller.active {
                continue;
            }
            let Some(target) = controller.current_focus else {
                continue;
            };
            if !interactables.contains(target) {
                continue;
            }

            consumed.mark(id);
            requests.write(InteractRequested { target, actor });
            break;
        }
    }
}
