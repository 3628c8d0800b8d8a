//! ECS components for entities.
//!
//! Submodules overview:
//! - [`entityshader`] – per-entity shader key and uniforms
//! - [`mapposition`] – world-space anchor of an entity's sprite
//! - [`spriteanimation`] – per-entity animation clock over a shared sprite sheet
//! - [`walker`] – idle/walk animation pair toggled by input
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod entityshader;
pub mod mapposition;
pub mod spriteanimation;
pub mod walker;
pub mod zindex;
