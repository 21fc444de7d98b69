//! Highlight helpers: focus / unfocus / disable
//!
//! Общая логика подсветки для всех interactable типов. Работает с парой
//! (`Interactable`, `Option<SurfaceAppearance>`), поэтому вызывается и из систем
//! (Query), и из exclusive кода (`&mut World`).

use crate::components::SurfaceAppearance;
use crate::interaction::interactable::Interactable;

/// onFocus: кэшируем текущий override, ставим highlight
///
/// Silent no-op (возвращает false) если:
/// - entity выключен,
/// - уже подсвечен,
/// - нет поверхности для подсветки (render inputs missing).
pub fn focus(interactable: &mut Interactable, surface: Option<&mut SurfaceAppearance>) -> bool {
    if !interactable.enabled || interactable.highlighted {
        return false;
    }
    let Some(surface) = surface else {
        return false;
    };

    interactable.cached_override = surface.surface_override.clone();
    let highlighted = interactable.highlight.apply(surface.active());
    surface.set_override(Some(highlighted));
    interactable.highlighted = true;

    true
}

/// onUnfocus: восстанавливаем cached override (или "без override")
///
/// Флаг и кэш сбрасываются ВСЕГДА, даже если поверхности уже нет —
/// иначе `highlighted` может залипнуть.
pub fn unfocus(interactable: &mut Interactable, surface: Option<&mut SurfaceAppearance>) -> bool {
    if !interactable.highlighted {
        return false;
    }

    let cached = interactable.cached_override.take();
    if let Some(surface) = surface {
        surface.set_override(cached);
    }
    interactable.highlighted = false;

    true
}

/// Выключить entity (one-shot, store, scene change)
///
/// Сначала снимаем подсветку, потом `enabled = false` — держит инвариант `highlighted ⇒ enabled`.
pub fn disable(interactable: &mut Interactable, surface: Option<&mut SurfaceAppearance>) {
    unfocus(interactable, surface);
    interactable.enabled = false;
}
