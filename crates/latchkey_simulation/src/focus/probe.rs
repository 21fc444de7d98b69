//! Probe: луч против сфер `ProbeCollider`
//!
//! Ближайшее попадание выигрывает. Occluder без Interactable тоже "выигрывает" —
//! фокуса тогда нет (нельзя выбрать дверь сквозь стену).

use bevy::prelude::*;

/// Результат probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Cast луча: `colliders` — (entity, center, radius)
///
/// - direction нормализуется; нулевой direction → None
/// - origin внутри сферы → сфера игнорируется (hit_from_inside = false)
/// - попадания дальше `max_distance` или позади origin отбрасываются
pub fn cast_ray<I>(origin: Vec3, direction: Vec3, max_distance: f32, colliders: I) -> Option<ProbeHit>
where
    I: IntoIterator<Item = (Entity, Vec3, f32)>,
{
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    let mut nearest: Option<ProbeHit> = None;

    for (entity, center, radius) in colliders {
        let Some(distance) = ray_sphere_distance(origin, direction, center, radius) else {
            continue;
        };
        if distance > max_distance {
            continue;
        }
        if nearest.map(|hit| distance < hit.distance).unwrap_or(true) {
            nearest = Some(ProbeHit { entity, distance });
        }
    }

    nearest
}

/// Расстояние до входа луча в сферу (direction уже нормализован)
fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let radius_sq = radius * radius;

    if to_center.length_squared() <= radius_sq {
        return None;
    }

    let closest = to_center.dot(direction);
    if closest < 0.0 {
        return None; // Сфера позади
    }

    let miss_sq = to_center.length_squared() - closest * closest;
    if miss_sq > radius_sq {
        return None;
    }

    Some(closest - (radius_sq - miss_sq).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn test_hit_straight_ahead() {
        let hit = cast_ray(Vec3::ZERO, Vec3::NEG_Z, 5.0, [(entity(1), Vec3::new(0.0, 0.0, -3.0), 0.5)]);

        let hit = hit.expect("sphere on the ray must be hit");
        assert_eq!(hit.entity, entity(1));
        assert!((hit.distance - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_wins() {
        let hit = cast_ray(
            Vec3::ZERO,
            Vec3::NEG_Z,
            10.0,
            [
                (entity(1), Vec3::new(0.0, 0.0, -6.0), 0.5),
                (entity(2), Vec3::new(0.0, 0.0, -2.0), 0.5),
            ],
        );
        assert_eq!(hit.map(|h| h.entity), Some(entity(2)));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let hit = cast_ray(Vec3::ZERO, Vec3::NEG_Z, 2.0, [(entity(1), Vec3::new(0.0, 0.0, -3.0), 0.5)]);
        assert!(hit.is_none());
    }

    #[test]
    fn test_behind_and_sideways_ignored() {
        let hit = cast_ray(
            Vec3::ZERO,
            Vec3::NEG_Z,
            10.0,
            [
                (entity(1), Vec3::new(0.0, 0.0, 3.0), 0.5),
                (entity(2), Vec3::new(2.0, 0.0, -3.0), 0.5),
            ],
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_origin_inside_sphere_ignored() {
        let hit = cast_ray(Vec3::ZERO, Vec3::NEG_Z, 10.0, [(entity(1), Vec3::new(0.0, 0.0, -0.2), 0.5)]);
        assert!(hit.is_none());
    }

    #[test]
    fn test_zero_direction() {
        let hit = cast_ray(Vec3::ZERO, Vec3::ZERO, 10.0, [(entity(1), Vec3::new(0.0, 0.0, -2.0), 0.5)]);
        assert!(hit.is_none());
    }
}
