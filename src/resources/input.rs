//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the demo cares about: arrow keys pan
//! the camera, SPACE toggles walking, F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub pan_up: BoolState,
    pub pan_down: BoolState,
    pub pan_left: BoolState,
    pub pan_right: BoolState,
    pub toggle_walk: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pan_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            pan_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            pan_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            pan_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            toggle_walk: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Pan direction from the held arrow keys, each axis in `-1.0..=1.0`.
    pub fn pan_axis(&self) -> (f32, f32) {
        let axis = |neg: &BoolState, pos: &BoolState| {
            (pos.active as i32 - neg.active as i32) as f32
        };
        (
            axis(&self.pan_left, &self.pan_right),
            axis(&self.pan_up, &self.pan_down),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_axis() {
        let mut input = InputState::default();
        assert_eq!(input.pan_axis(), (0.0, 0.0));

        input.pan_right.active = true;
        input.pan_up.active = true;
        assert_eq!(input.pan_axis(), (1.0, -1.0));

        input.pan_left.active = true;
        assert_eq!(input.pan_axis(), (0.0, -1.0));
    }
}
