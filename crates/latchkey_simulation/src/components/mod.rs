//! ECS Components, общие для всех interaction подсистем
//!
//! Организация по доменам:
//! - actor: capabilities актора (Encumbrance, Inventory)
//! - appearance: render boundary (Appearance, SurfaceAppearance, HighlightStyle)
//! - world: probe/scene-graph маркеры (ProbeCollider, Viewpoint, InspectionAnchor)

pub mod actor;
pub mod appearance;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use appearance::*;
pub use world::*;
