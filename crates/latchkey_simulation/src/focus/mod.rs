//! Focus module — что актор сейчас "видит" и может использовать
//!
//! - controller: `FocusController` компонент, `set_focus_active`
//! - probe: ray vs sphere math
//! - systems: `update_focus`, `dispatch_interact_trigger`

pub mod controller;
pub mod probe;
pub mod systems;

// Re-exports
pub use controller::{set_focus_active, FocusController, SetFocusActive, DEFAULT_PROBE_RANGE};
pub use probe::{cast_ray, ProbeHit};
pub use systems::*;
