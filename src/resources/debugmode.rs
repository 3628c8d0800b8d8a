//! Debug toggle resource.
//!
//! Present while the debug HUD is on. Toggled at runtime by
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent) or
//! inserted at startup with `--debug`.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the HUD adds frame, clock and camera lines.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
