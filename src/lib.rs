//! critterfarm library.
//!
//! Sprite-sheet animation clocks, an isometric tile map with back-to-front
//! draw order, and the raylib rendering around them. Exposed as a library so
//! the ECS pieces can be driven headless from integration tests.

pub mod backend;
pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
