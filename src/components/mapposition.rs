//! World-space position component.
//!
//! Marks where an entity's sprite is anchored in world pixels. The sprite's
//! top-left corner is drawn at this point, shifted by the camera offset.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
