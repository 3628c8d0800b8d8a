//! Camera pan system.
//!
//! Moves the [`Camera`] offset while arrow keys are held, at
//! [`CAMERA_PAN_SPEED`] pixels per second of world time.
use bevy_ecs::prelude::*;

use crate::resources::camera::{CAMERA_PAN_SPEED, Camera};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn camera_pan_system(
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut camera: ResMut<Camera>,
) {
    let (dx, dy) = input.pan_axis();
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    let step = CAMERA_PAN_SPEED * time.delta;
    camera.pan(dx * step, dy * step);
}
