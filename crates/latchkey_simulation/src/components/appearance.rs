//! Render boundary: Appearance, SurfaceAppearance, HighlightStyle
//!
//! Ядро не знает material internals. Ему нужно только:
//! - прочитать текущий override поверхности,
//! - поставить override (или убрать его — `None`),
//! - построить highlight appearance (цвет + emission).
//!
//! Renderer хоста синхронизирует `SurfaceAppearance` в реальный material.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Упрощённый material: albedo + emission
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Appearance {
    pub albedo: Vec4,
    pub emission: Vec3,
    pub emission_energy: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            albedo: Vec4::ONE,
            emission: Vec3::ZERO,
            emission_energy: 0.0,
        }
    }
}

impl Appearance {
    pub fn with_albedo(albedo: Vec4) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }
}

/// Поверхность меша (surface 0): базовый material + override слот
///
/// Инвариант: `active()` = override если есть, иначе base.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SurfaceAppearance {
    /// Material из меша (не трогаем)
    pub base: Option<Appearance>,
    /// Override слот (highlight пишется сюда)
    pub surface_override: Option<Appearance>,
}

impl SurfaceAppearance {
    pub fn new(base: Appearance) -> Self {
        Self {
            base: Some(base),
            surface_override: None,
        }
    }

    /// Что сейчас рисуется
    pub fn active(&self) -> Option<&Appearance> {
        self.surface_override.as_ref().or(self.base.as_ref())
    }

    pub fn set_override(&mut self, appearance: Option<Appearance>) {
        self.surface_override = appearance;
    }
}

/// Параметры подсветки focused объекта
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// RGBA
    pub color: [f32; 4],
    /// 0.0 = без emission
    pub emission_strength: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: [1.0, 0.85, 0.3, 1.0], // Тёплый жёлтый
            emission_strength: 0.4,
        }
    }
}

impl HighlightStyle {
    /// Highlight поверх текущего appearance (или дефолтного, если поверхность пустая)
    pub fn apply(&self, active: Option<&Appearance>) -> Appearance {
        let mut highlighted = active.cloned().unwrap_or_default();
        let color = Vec4::from_array(self.color);
        highlighted.albedo = color;

        if self.emission_strength > 0.0 {
            highlighted.emission = color.truncate();
            highlighted.emission_energy = self.emission_strength;
        }

        highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_prefers_override() {
        let mut surface = SurfaceAppearance::new(Appearance::with_albedo(Vec4::new(0.2, 0.2, 0.2, 1.0)));
        assert_eq!(surface.active().map(|a| a.albedo.x), Some(0.2));

        surface.set_override(Some(Appearance::with_albedo(Vec4::new(0.9, 0.0, 0.0, 1.0))));
        assert_eq!(surface.active().map(|a| a.albedo.x), Some(0.9));

        surface.set_override(None);
        assert_eq!(surface.active().map(|a| a.albedo.x), Some(0.2));
    }

    #[test]
    fn test_highlight_applies_color_and_emission() {
        let style = HighlightStyle {
            color: [0.0, 1.0, 0.0, 1.0],
            emission_strength: 2.0,
        };
        let base = Appearance::with_albedo(Vec4::new(0.5, 0.5, 0.5, 1.0));

        let highlighted = style.apply(Some(&base));
        assert_eq!(highlighted.albedo, Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(highlighted.emission, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(highlighted.emission_energy, 2.0);
    }

    #[test]
    fn test_highlight_without_emission_keeps_base_emission() {
        let style = HighlightStyle {
            color: [1.0, 0.0, 0.0, 1.0],
            emission_strength: 0.0,
        };

        let highlighted = style.apply(None);
        assert_eq!(highlighted.albedo, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(highlighted.emission, Vec3::ZERO);
        assert_eq!(highlighted.emission_energy, 0.0);
    }
}
