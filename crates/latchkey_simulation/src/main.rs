//! Headless симуляция LATCHKEY
//!
//! Прогоняет key → door сценарий без рендера: поднять ключ, сложить,
//! открыть запертую дверь, пройти в следующую сцену.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use latchkey_simulation::{
    create_headless_app, AnimatedToggle, ClipPlayer, Encumbrance, FlagStore, FocusController, Inventory, Pickupable, PlayerInput,
    ProbeCollider, SceneChangeRequested, SceneChanger, Viewpoint,
};
use std::time::Duration;

/// Scripted input: (тик, событие)
const SCRIPT: &[(u32, PlayerInput)] = &[
    (2, PlayerInput::Interact), // ключ → inspect
    (3, PlayerInput::PointerMotion(Vec2::new(40.0, -10.0))),
    (12, PlayerInput::Interact), // lock снят → store
];

fn main() {
    println!("Starting LATCHKEY headless simulation");

    let mut app = create_headless_app();
    // Фиксированный шаг 100ms: lock timers и clips не зависят от скорости машины
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    let world = app.world_mut();

    let player = world
        .spawn((
            Transform::from_xyz(0.0, 1.6, 0.0),
            FocusController::default(),
            Encumbrance::default(),
            Inventory::default(),
        ))
        .id();
    world.spawn((Viewpoint, Transform::from_xyz(0.0, 1.6, 0.0)));

    let key = world
        .spawn((
            Pickupable::new("Brass key")
                .with_description("Cold, heavy, smells of the cellar.")
                .with_stored_flag("has_key"),
            Transform::from_xyz(0.0, 1.6, -1.5),
        ))
        .id();

    let door = world
        .spawn((
            AnimatedToggle::new("open").requires_flag("has_key").one_time().sets_flag("door_open"),
            ClipPlayer::new().with_clip("open", 0.8),
            ProbeCollider::sphere(0.6),
            Transform::from_xyz(0.0, 1.6, 1.5),
        ))
        .id();

    let portal = world
        .spawn((
            SceneChanger::new("cellar").requires_flag("door_open"),
            ProbeCollider::sphere(0.6),
            Transform::from_xyz(2.0, 1.6, 0.0),
        ))
        .id();

    println!("Player {:?}, key {:?}, door {:?}, portal {:?}", player, key, door, portal);

    for tick in 0..40u32 {
        for (at, input) in SCRIPT {
            if *at == tick {
                app.world_mut().send_event(*input);
            }
        }

        // Ключ сложен → разворачиваемся к двери, потом к порталу
        match tick {
            15 => aim(&mut app, player, Vec3::new(0.0, 1.6, 1.5)),
            16 => {
                app.world_mut().send_event(PlayerInput::Interact);
            }
            30 => aim(&mut app, player, Vec3::new(2.0, 1.6, 0.0)),
            31 => {
                app.world_mut().send_event(PlayerInput::Interact);
            }
            _ => {}
        }

        app.update();

        let scene_requests = app.world().resource::<Events<SceneChangeRequested>>();
        let mut cursor = scene_requests.get_cursor();
        if let Some(request) = cursor.read(scene_requests).last() {
            println!("Tick {}: scene change → '{}'", tick, request.target_scene);
            break;
        }
    }

    let flags = app.world().resource::<FlagStore>();
    println!("has_key = {}, door_open = {}", flags.get("has_key"), flags.get("door_open"));

    if let Some(inventory) = app.world().get::<Inventory>(player) {
        for item in &inventory.items {
            println!("Inventory: {} — {}", item.name, item.description);
        }
    }

    println!("Simulation complete!");
}

fn aim(app: &mut App, actor: Entity, target: Vec3) {
    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(actor) {
        *transform = transform.looking_at(target, Vec3::Y);
    }
}
