//! Input systems.
//!
//! - [`update_input_state`] reads the keyboard from raylib each frame and
//!   writes the results into [`InputState`].
//! - Key presses that act on the world are forwarded as events
//!   ([`SwitchDebugEvent`], [`ToggleWalkEvent`]).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::togglewalk::ToggleWalkEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    };

    poll(&mut input.pan_up);
    poll(&mut input.pan_down);
    poll(&mut input.pan_left);
    poll(&mut input.pan_right);
    poll(&mut input.toggle_walk);
    poll(&mut input.mode_debug);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.toggle_walk.just_pressed {
        commands.trigger(ToggleWalkEvent {});
    }
}
