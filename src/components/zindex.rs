//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component controls the drawing order of sprites. Entities
//! with higher z-index values are drawn on top of those with lower values.
//! Tiles are always painted before any sprite.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). Entities without a `ZIndex` sort
/// as `ZIndex(0)`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
