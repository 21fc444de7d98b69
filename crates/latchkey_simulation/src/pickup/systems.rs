//! Pickup systems
//!
//! **Lifecycle:**
//! - `process_pickup_interactions` — InWorld → BeingViewed (anchor, lock, encumbrance)
//! - `handle_inspection_input` — pointer motion → rotation, discrete input → StoreRequested
//! - `tick_inspection_locks` — lock timer → `locked = false`
//! - `store_pickups` — BeingViewed → Stored, ItemStored
//! - `raise_flags_on_store`, `collect_stored_items` — listeners (entity ещё жив)
//! - `despawn_stored_pickups` — anchor + предмет уничтожаются

use bevy::prelude::*;

use crate::components::{
    Encumbrance, InspectionAnchor, Inventory, ItemRecord, ProbeCollider, SurfaceAppearance, Viewpoint,
};
use crate::flags::FlagStore;
use crate::interaction::error::{self, InteractionError};
use crate::interaction::{
    highlight, ConsumedInput, InputCapture, InteractRequested, Interactable, InteractionSettings,
    InteractionSignals, ItemStored, PlayerInput, StoreRequested,
};
use crate::pickup::components::{Inspection, PickupState, Pickupable};

// ============================================================================
// InWorld → BeingViewed
// ============================================================================

/// Система: pickup по InteractRequested
///
/// # Flow
/// 1. Re-entrancy guard: только из InWorld (BeingViewed/Stored → no-op)
/// 2. Disabled → rejection через base interact (до поиска Viewpoint)
/// 3. Viewpoint актора (child актора), иначе первый найденный; нет ни одного →
///    configuration error, остаёмся InWorld, Interacted не отправляется
/// 4. Unfocus, выключить collision, detach от original parent
/// 5. Anchor перед Viewpoint, предмет → child anchor, сброс ориентации, zoom
/// 6. Inspection lock timer, encumbrance актора (best-effort), захват input
pub fn process_pickup_interactions(
    mut commands: Commands,
    mut requests: EventReader<InteractRequested>,
    mut pickups: Query<(
        &mut Interactable,
        &Pickupable,
        &mut PickupState,
        &mut Transform,
        Option<&mut SurfaceAppearance>,
        Option<&mut ProbeCollider>,
        Option<&ChildOf>,
    )>,
    viewpoints: Query<(Entity, Option<&ChildOf>), With<Viewpoint>>,
    mut actors: Query<&mut Encumbrance>,
    mut capture: ResMut<InputCapture>,
    mut signals: InteractionSignals,
    settings: Res<InteractionSettings>,
) {
    for request in requests.read() {
        let item = request.target;
        let Ok((mut interactable, pickup, mut state, mut transform, mut surface, collider, child_of)) =
            pickups.get_mut(item)
        else {
            continue;
        };

        // 1. Re-entrancy guard (независимо от enabled)
        if *state != PickupState::InWorld {
            settings.trace_rejection(&format!("{:?}: pickup ignored (state {:?})", item, *state));
            continue;
        }

        // 2. Enabled guard (rejection path)
        if !interactable.enabled {
            signals.base_interact(item, &interactable, request.actor);
            settings.trace_rejection(&format!("{:?}: pickup rejected (disabled)", item));
            continue;
        }

        // 3. Viewpoint
        let Some(viewpoint) = holder_viewpoint(&viewpoints, request.actor) else {
            error::report(&InteractionError::MissingViewpoint { item });
            continue;
        };

        signals.base_interact(item, &interactable, request.actor);

        // 4. Убираем из мира
        if interactable.highlighted {
            highlight::unfocus(&mut interactable, surface.as_deref_mut());
        }
        if let Some(mut collider) = collider {
            collider.enabled = false;
        }
        let original_parent = child_of.map(|child_of| child_of.parent());
        commands.entity(item).remove::<ChildOf>();

        // 5. Ownership → anchor перед камерой
        let anchor = commands
            .spawn((
                InspectionAnchor,
                Transform::from_xyz(0.0, 0.0, -pickup.inspect_distance),
                ChildOf(viewpoint),
            ))
            .id();
        commands.entity(item).insert(ChildOf(anchor));

        let inspection = Inspection::new(anchor, pickup);
        *transform = inspection.local_transform();
        commands.entity(item).insert(inspection);

        // 6. State + actor
        *state = PickupState::BeingViewed {
            holder: request.actor,
            original_parent,
        };

        if let Ok(mut encumbrance) = actors.get_mut(request.actor) {
            encumbrance.set_encumbered(true);
        }

        capture.captured_by = Some(item);

        crate::log(&format!(
            "✋ {:?} picked up '{}' ({:?}), inspection locked for {:.2}s",
            request.actor, pickup.name, item, pickup.lock_duration_secs
        ));
    }
}

/// Viewpoint, прикреплённый к актору; без такого — первый в мире
fn holder_viewpoint(
    viewpoints: &Query<(Entity, Option<&ChildOf>), With<Viewpoint>>,
    actor: Entity,
) -> Option<Entity> {
    viewpoints
        .iter()
        .find(|(_, child_of)| child_of.is_some_and(|child_of| child_of.parent() == actor))
        .or_else(|| viewpoints.iter().next())
        .map(|(viewpoint, _)| viewpoint)
}

// ============================================================================
// BeingViewed: input
// ============================================================================

/// Система: input пока предмет рассматривается
///
/// Весь input consumed (FocusController его не увидит):
/// - PointerMotion → yaw/pitch, всегда
/// - остальное → если locked, ничего; иначе StoreRequested
///
/// Захвативший предмет уничтожен (или уже не BeingViewed) → capture
/// отпускается, input идёт дальше по pipeline.
pub fn handle_inspection_input(
    mut inputs: EventReader<PlayerInput>,
    mut consumed: ResMut<ConsumedInput>,
    mut capture: ResMut<InputCapture>,
    settings: Res<InteractionSettings>,
    mut items: Query<(&PickupState, &mut Inspection, &mut Transform)>,
    mut store_requests: EventWriter<StoreRequested>,
) {
    for (input, id) in inputs.read_with_id() {
        let Some(item) = capture.captured_by else {
            continue;
        };

        // Weak reference: проверяем, что предмет ещё рассматривается
        let Ok((state, mut inspection, mut transform)) = items.get_mut(item) else {
            release_stale_capture(&mut capture, item);
            continue;
        };
        let Some(holder) = state.holder() else {
            release_stale_capture(&mut capture, item);
            continue;
        };

        consumed.mark(id);

        match input {
            PlayerInput::PointerMotion(delta) => {
                inspection.rotate(*delta, settings.pointer_sensitivity);
                transform.rotation = inspection.orientation();
            }
            _ => {
                if inspection.locked {
                    continue;
                }
                store_requests.write(StoreRequested { item, actor: holder });
            }
        }
    }
}

fn release_stale_capture(capture: &mut InputCapture, item: Entity) {
    capture.captured_by = None;
    crate::log_warning(&format!("{:?} captured input but is no longer inspected, capture released", item));
}

/// Система: inspection lock timers
///
/// Тик, в котором Inspection добавлен, пропускаем: lock не должен сняться
/// раньше полного `lock_duration_secs` после pickup.
pub fn tick_inspection_locks(time: Res<Time>, mut inspections: Query<(Entity, &mut Inspection)>) {
    let delta = time.delta();

    for (entity, mut inspection) in inspections.iter_mut() {
        if inspection.is_added() || !inspection.locked {
            continue;
        }
        if inspection.tick_lock(delta) {
            crate::log(&format!("🔓 {:?} inspection unlocked", entity));
        }
    }
}

// ============================================================================
// BeingViewed → Stored
// ============================================================================

/// Система: store
///
/// # Flow
/// 1. Guard: только из BeingViewed (Stored → idempotent no-op)
/// 2. ItemStored (entity ещё жив — listeners читают данные)
/// 3. enabled = false, encumbrance снята, input capture отпущен
/// 4. state = Stored (despawn в `despawn_stored_pickups`)
pub fn store_pickups(
    mut requests: EventReader<StoreRequested>,
    mut items: Query<(&mut Interactable, &Pickupable, &mut PickupState, Option<&mut SurfaceAppearance>)>,
    mut actors: Query<&mut Encumbrance>,
    mut capture: ResMut<InputCapture>,
    mut stored: EventWriter<ItemStored>,
) {
    for request in requests.read() {
        let Ok((mut interactable, pickup, mut state, mut surface)) = items.get_mut(request.item) else {
            continue;
        };

        let Some(holder) = state.holder() else {
            continue; // InWorld или уже Stored
        };

        stored.write(ItemStored {
            item: request.item,
            actor: holder,
        });

        highlight::disable(&mut interactable, surface.as_deref_mut());

        if let Ok(mut encumbrance) = actors.get_mut(holder) {
            encumbrance.set_encumbered(false);
        }

        if capture.captured_by == Some(request.item) {
            capture.captured_by = None;
        }

        *state = PickupState::Stored;

        crate::log(&format!("📦 {:?} stored '{}' ({:?})", holder, pickup.name, request.item));
    }
}

/// Listener: `Pickupable::stored_flag` → FlagStore
pub fn raise_flags_on_store(
    mut stored: EventReader<ItemStored>,
    items: Query<&Pickupable>,
    mut flags: ResMut<FlagStore>,
) {
    for event in stored.read() {
        let Ok(pickup) = items.get(event.item) else {
            continue;
        };
        if let Some(flag) = &pickup.stored_flag {
            flags.set(flag.clone(), true);
        }
    }
}

/// Listener: копия данных предмета в Inventory актора (если он есть)
pub fn collect_stored_items(
    mut stored: EventReader<ItemStored>,
    items: Query<&Pickupable>,
    mut inventories: Query<&mut Inventory>,
) {
    for event in stored.read() {
        let Ok(pickup) = items.get(event.item) else {
            continue;
        };
        let Ok(mut inventory) = inventories.get_mut(event.actor) else {
            continue;
        };

        inventory.add(ItemRecord {
            name: pickup.name.clone(),
            description: pickup.description.clone(),
        });
    }
}

/// Система: despawn сложенных предметов (последняя в тике)
///
/// Anchor despawn рекурсивный — предмет уходит вместе с ним.
pub fn despawn_stored_pickups(
    mut commands: Commands,
    items: Query<(Entity, &PickupState, Option<&Inspection>)>,
) {
    for (entity, state, inspection) in items.iter() {
        if *state != PickupState::Stored {
            continue;
        }

        let target = inspection.map(|inspection| inspection.anchor).unwrap_or(entity);
        if let Ok(mut entity_commands) = commands.get_entity(target) {
            entity_commands.despawn();
        }
    }
}
