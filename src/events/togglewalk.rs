//! Event and observer that start or stop every [`Walker`].
//!
//! The observer flips each walker's state and selects the matching animation
//! on its [`SpriteAnimation`]. Walkers that were already on the target
//! animation keep their current frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::components::spriteanimation::SpriteAnimation;
use crate::components::walker::Walker;

#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleWalkEvent {}

/// Walker counts after a toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSummary {
    pub walking: usize,
    pub idle: usize,
    /// Walkers whose animation could not be switched.
    pub failed: usize,
}

/// Flip every walker yielded by `walkers` and switch its animation.
pub fn toggle_walkers<'w>(
    walkers: impl Iterator<Item = (Mut<'w, Walker>, Mut<'w, SpriteAnimation>)>,
) -> ToggleSummary {
    let mut summary = ToggleSummary::default();
    for (mut walker, mut animation) in walkers {
        walker.walking = !walker.walking;
        if let Err(e) = animation.set_animation(walker.current()) {
            error!("ToggleWalkEvent: {}", e);
            summary.failed += 1;
            continue;
        }
        if walker.walking {
            summary.walking += 1;
        } else {
            summary.idle += 1;
        }
    }
    summary
}

pub fn toggle_walk_observer(
    _trigger: On<ToggleWalkEvent>,
    mut query: Query<(&mut Walker, &mut SpriteAnimation)>,
) {
    let summary = toggle_walkers(query.iter_mut());
    info!(
        "Walkers toggled: {} walking, {} idle",
        summary.walking, summary.idle
    );
}
