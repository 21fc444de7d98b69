//! Tests for AnimatedToggle components.

#[cfg(test)]
mod tests {
    use crate::animation::ClipRequest;
    use crate::toggle::components::{AnimatedToggle, ToggleState};

    #[test]
    fn test_toggle_state_default() {
        let state = ToggleState::default();
        assert!(state.in_flight.is_none());
        assert!(!state.toggled_on);
    }

    #[test]
    fn test_non_toggle_always_forward() {
        let toggle = AnimatedToggle::new("pull");
        assert_eq!(toggle.resolve_clip(false), Some(ClipRequest::forward("pull")));
        assert_eq!(toggle.resolve_clip(true), Some(ClipRequest::forward("pull")));
    }

    #[test]
    fn test_toggle_with_reverse_clip() {
        let toggle = AnimatedToggle::new("open").toggled(Some("close"));
        assert_eq!(toggle.resolve_clip(false), Some(ClipRequest::forward("open")));
        assert_eq!(toggle.resolve_clip(true), Some(ClipRequest::forward("close")));
    }

    #[test]
    fn test_toggle_without_reverse_plays_backward() {
        let toggle = AnimatedToggle::new("open").toggled(None);
        assert_eq!(toggle.resolve_clip(true), Some(ClipRequest::backward("open")));
    }

    #[test]
    fn test_toggle_reverse_only() {
        let toggle = AnimatedToggle {
            reverse_animation: Some("close".into()),
            toggle: true,
            ..Default::default()
        };
        assert_eq!(toggle.resolve_clip(false), None);
        assert_eq!(toggle.resolve_clip(true), Some(ClipRequest::forward("close")));
    }

    #[test]
    fn test_nothing_configured() {
        let toggle = AnimatedToggle {
            toggle: true,
            ..Default::default()
        };
        assert_eq!(toggle.resolve_clip(false), None);
        assert_eq!(toggle.resolve_clip(true), None);
    }

    #[test]
    fn test_empty_names_treated_as_missing() {
        let toggle = AnimatedToggle::new("").toggled(Some(""));
        assert_eq!(toggle.resolve_clip(false), None);
        assert_eq!(toggle.resolve_clip(true), None);
    }
}
