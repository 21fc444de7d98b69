//! Tests for highlight helpers.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::components::{Appearance, SurfaceAppearance};
    use crate::interaction::highlight::{disable, focus, unfocus};
    use crate::interaction::Interactable;

    fn grey_surface() -> SurfaceAppearance {
        SurfaceAppearance::new(Appearance::with_albedo(Vec4::new(0.3, 0.3, 0.3, 1.0)))
    }

    #[test]
    fn test_focus_unfocus_restores_no_override() {
        let mut interactable = Interactable::new();
        let mut surface = grey_surface();
        let before = surface.clone();

        assert!(focus(&mut interactable, Some(&mut surface)));
        assert!(interactable.highlighted);
        assert!(surface.surface_override.is_some());

        assert!(unfocus(&mut interactable, Some(&mut surface)));
        assert!(!interactable.highlighted);
        assert!(interactable.cached_override.is_none());
        assert_eq!(surface, before);
    }

    #[test]
    fn test_focus_unfocus_restores_existing_override() {
        let mut interactable = Interactable::new();
        let mut surface = grey_surface();
        surface.set_override(Some(Appearance::with_albedo(Vec4::new(0.0, 0.0, 1.0, 1.0))));
        let before = surface.clone();

        focus(&mut interactable, Some(&mut surface));
        assert_ne!(surface, before);

        unfocus(&mut interactable, Some(&mut surface));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_focus_disabled_is_noop() {
        let mut interactable = Interactable::new().disabled();
        let mut surface = grey_surface();

        assert!(!focus(&mut interactable, Some(&mut surface)));
        assert!(!interactable.highlighted);
        assert!(surface.surface_override.is_none());
    }

    #[test]
    fn test_focus_twice_keeps_first_cache() {
        let mut interactable = Interactable::new();
        let mut surface = grey_surface();

        assert!(focus(&mut interactable, Some(&mut surface)));
        // Второй focus не должен закэшировать highlight как "оригинал"
        assert!(!focus(&mut interactable, Some(&mut surface)));

        unfocus(&mut interactable, Some(&mut surface));
        assert!(surface.surface_override.is_none());
    }

    #[test]
    fn test_focus_without_surface_is_noop() {
        let mut interactable = Interactable::new();
        assert!(!focus(&mut interactable, None));
        assert!(!interactable.highlighted);
    }

    #[test]
    fn test_unfocus_clears_flag_even_without_surface() {
        let mut interactable = Interactable::new();
        let mut surface = grey_surface();
        focus(&mut interactable, Some(&mut surface));

        // Поверхность пропала (меш удалён) — флаг всё равно сбрасывается
        assert!(unfocus(&mut interactable, None));
        assert!(!interactable.highlighted);
        assert!(interactable.cached_override.is_none());
    }

    #[test]
    fn test_disable_unfocuses_first() {
        let mut interactable = Interactable::new();
        let mut surface = grey_surface();
        focus(&mut interactable, Some(&mut surface));

        disable(&mut interactable, Some(&mut surface));
        assert!(!interactable.enabled);
        assert!(!interactable.highlighted);
        assert!(surface.surface_override.is_none());
    }

    /// Random focus/unfocus/enable/disable последовательности: highlighted ⇒ enabled всегда
    #[test]
    fn test_highlight_implies_enabled_random_sequences() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..200 {
            let mut interactable = Interactable::new();
            let mut surface = grey_surface();
            let original = surface.clone();

            for _ in 0..50 {
                match rng.gen_range(0..5) {
                    0 => {
                        focus(&mut interactable, Some(&mut surface));
                    }
                    1 => {
                        unfocus(&mut interactable, Some(&mut surface));
                    }
                    2 => disable(&mut interactable, Some(&mut surface)),
                    3 => interactable.enabled = true,
                    _ => {
                        focus(&mut interactable, None);
                    }
                }

                assert!(!interactable.highlighted || interactable.enabled);
                if !interactable.highlighted {
                    assert!(interactable.cached_override.is_none());
                    assert_eq!(surface, original);
                }
            }
        }
    }
}
