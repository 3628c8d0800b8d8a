//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: the tile map and its atlas,
//! sprite sheets, timing, input, camera and the raylib-owned asset stores.
//! Resources holding GPU handles (`TextureStore`, `FontStore`,
//! `ShaderStore`, `RenderTarget`) are non-send and live on the main thread.
//!
//! Overview
//! - `camera` – pan offset shared by the map and sprites
//! - `debugmode` – presence enables the debug HUD lines
//! - `fontstore` – loaded fonts with fixed glyph metrics
//! - `gameconfig` – INI-backed window, render and map settings
//! - `input` – per-frame keyboard state of keys relevant to the demo
//! - `rendertarget` – fixed-resolution texture the scene is drawn into
//! - `shaderstore` – loaded fragment shaders and their uniform locations
//! - `spritesheet` – frame grids and animation tables
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tileatlas` – tile kind to tileset frame lookup
//! - `tilemap` – square isometric tile grid and its draw order
//! - `windowsize` – actual window size and letterbox math
//! - `worldtime` – simulation time, delta and FPS counter
pub mod camera;
pub mod debugmode;
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod rendertarget;
pub mod shaderstore;
pub mod spritesheet;
pub mod texturestore;
pub mod tileatlas;
pub mod tilemap;
pub mod windowsize;
pub mod worldtime;
