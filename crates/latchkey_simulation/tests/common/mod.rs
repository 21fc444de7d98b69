//! Общие helpers для integration тестов
//!
//! - `test_app()` — headless App с фиксированным шагом 100ms
//! - `Recorded<E>` — копит события за всё время теста (читается в `Last`)

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use latchkey_simulation::*;
use std::time::Duration;

/// Шаг симуляции в тестах
pub const TICK: Duration = Duration::from_millis(100);

/// Headless App + SimulationPlugin, время продвигается ровно на `TICK` за update
///
/// Первый update всегда с нулевым delta (Time так устроен), поэтому делаем его сразу:
/// тесты стартуют с "прогретого" App.
pub fn test_app() -> App {
    let mut app = create_headless_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));
    app.update();
    app
}

/// Все события типа `E`, отправленные с момента `record::<E>()`
pub struct Recorded<E: Event> {
    pub events: Vec<E>,
}

impl<E: Event> Resource for Recorded<E> {}

impl<E: Event> Default for Recorded<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

fn record_system<E: Event + Clone>(mut reader: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.events.extend(reader.read().cloned());
}

/// Начать запись событий `E`
pub fn record<E: Event + Clone>(app: &mut App) {
    app.init_resource::<Recorded<E>>();
    app.add_systems(Last, record_system::<E>);
}

pub fn recorded<E: Event + Clone>(app: &App) -> Vec<E> {
    app.world().resource::<Recorded<E>>().events.clone()
}

pub fn clear_recorded<E: Event>(app: &mut App) {
    app.world_mut().resource_mut::<Recorded<E>>().events.clear();
}

/// Игрок в `position`, смотрит вдоль -Z
pub fn spawn_player(app: &mut App, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((
            Transform::from_translation(position),
            FocusController::default(),
            Encumbrance::default(),
            Inventory::default(),
        ))
        .id()
}

pub fn spawn_viewpoint(app: &mut App, position: Vec3) -> Entity {
    app.world_mut().spawn((Viewpoint, Transform::from_translation(position))).id()
}

/// Серый материал без override (чтобы было что подсвечивать)
pub fn grey_surface() -> SurfaceAppearance {
    SurfaceAppearance::new(Appearance::with_albedo(Vec4::new(0.5, 0.5, 0.5, 1.0)))
}

/// Развернуть актора на точку
pub fn aim(app: &mut App, actor: Entity, target: Vec3) {
    let mut entity = app.world_mut().entity_mut(actor);
    let Some(mut transform) = entity.get_mut::<Transform>() else {
        return;
    };
    *transform = transform.looking_at(target, Vec3::Y);
}

/// Отправить input и прогнать один тик
pub fn press(app: &mut App, input: PlayerInput) {
    app.world_mut().send_event(input);
    app.update();
}

pub fn tick(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

pub fn get<T: Component + Clone>(app: &App, entity: Entity) -> T {
    app.world()
        .get::<T>(entity)
        .cloned()
        .unwrap_or_else(|| panic!("{:?} has no {}", entity, std::any::type_name::<T>()))
}

pub fn is_alive(app: &App, entity: Entity) -> bool {
    app.world().get_entity(entity).is_ok()
}
