//! Pickup module — предметы, которые можно поднять, рассмотреть и сложить
//!
//! InWorld → BeingViewed → Stored (только вперёд).

pub mod components;
pub mod systems;


// Re-exports
pub use components::{Inspection, PickupState, Pickupable, DEFAULT_INSPECTION_LOCK_SECS};
pub use systems::*;
