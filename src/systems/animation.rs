//! Animation system.
//!
//! Advances every [`SpriteAnimation`] clock by the frame's
//! [`WorldTime`] delta. Frame selection, wrapping and multi-frame skips after
//! a long frame all live in [`SpriteAnimation::advance`].
//!
//! # Related
//!
//! - [`crate::resources::spritesheet::SpriteSheet`] – animation tables
//! - [`crate::events::togglewalk`] – switches the active animation
use bevy_ecs::prelude::*;

use crate::components::spriteanimation::SpriteAnimation;
use crate::resources::worldtime::WorldTime;

pub fn animation(mut query: Query<&mut SpriteAnimation>, time: Res<WorldTime>) {
    for mut anim in query.iter_mut() {
        anim.advance(time.delta);
    }
}
