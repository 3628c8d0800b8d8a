//! Shared camera offset resource.
//!
//! The scene is drawn in world pixels; the camera offset is subtracted from
//! every world position to get the render-target position. Panning moves the
//! whole map and every sprite together.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Pan speed in pixels per second.
pub const CAMERA_PAN_SPEED: f32 = 120.0;

#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera {
    pub offset: Vector2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl Camera {
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        Vector2 {
            x: world.x - self.offset.x,
            y: world.y - self.offset.y,
        }
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx;
        self.offset.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_shifts_screen_positions() {
        let mut camera = Camera::default();
        let p = camera.world_to_screen(Vector2 { x: 10.0, y: 20.0 });
        assert_eq!((p.x, p.y), (10.0, 20.0));

        camera.pan(4.0, -6.0);
        let p = camera.world_to_screen(Vector2 { x: 10.0, y: 20.0 });
        assert_eq!((p.x, p.y), (6.0, 26.0));
    }
}
