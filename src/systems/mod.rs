//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animation clocks by the frame delta
//! - [`camera`] – pan the camera from held arrow keys
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the tile map, sprites and HUD using Raylib
//! - [`time`] – update simulation time, delta and FPS

pub mod animation;
pub mod camera;
pub mod input;
pub mod render;
pub mod time;
