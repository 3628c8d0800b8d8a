//! Idle/walk pair for entities that can be told to start or stop walking.

use bevy_ecs::prelude::Component;

use crate::resources::spritesheet::AnimationId;

#[derive(Component, Clone, Copy, Debug)]
pub struct Walker {
    pub idle: AnimationId,
    pub walk: AnimationId,
    pub walking: bool,
}

impl Walker {
    pub fn new(idle: AnimationId, walk: AnimationId, walking: bool) -> Self {
        Self {
            idle,
            walk,
            walking,
        }
    }

    /// Animation matching the current walking state.
    pub fn current(&self) -> AnimationId {
        if self.walking { self.walk } else { self.idle }
    }
}
