//! Animated toggle module — рычаги, двери, ящики
//!
//! Один clip в полёте, toggle/reverse, one-shot lockout,
//! gating/cascade через FlagStore.

pub mod components;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod components_tests;

// Re-exports
pub use components::{AnimatedToggle, ToggleState};
pub use systems::*;
