//! Event types and observers used by the engine.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`togglewalk`] – switch walkers between their idle and walk animations
pub mod switchdebug;
pub mod togglewalk;
