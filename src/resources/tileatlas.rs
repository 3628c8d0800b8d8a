//! Tile kind to tileset frame lookup.
//!
//! The [`TileMap`](crate::resources::tilemap::TileMap) only stores
//! [`TileKind`]s; this resource tells the renderer which frame of the tileset
//! sprite sheet paints each kind.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;

use crate::error::{EngineError, Result};
use crate::resources::spritesheet::{FrameCoord, SpriteSheet};
use crate::resources::tilemap::TileKind;

#[derive(Resource, Debug, Clone)]
pub struct TileAtlas {
    sheet: Arc<SpriteSheet>,
    frames: FxHashMap<TileKind, FrameCoord>,
}

impl TileAtlas {
    pub fn new(sheet: Arc<SpriteSheet>) -> Self {
        Self {
            sheet,
            frames: FxHashMap::default(),
        }
    }

    /// Assign the tileset frame used to paint `kind`.
    ///
    /// [`TileKind::None`] is never painted and cannot be assigned a frame.
    pub fn insert(&mut self, kind: TileKind, frame: FrameCoord) -> Result<()> {
        if kind.is_empty() {
            return Err(EngineError::InvalidTileFrame(
                "the empty tile kind has no atlas frame".to_string(),
            ));
        }
        if !self.sheet.contains_frame(frame) {
            return Err(EngineError::InvalidTileFrame(format!(
                "tile frame ({}, {}) is outside the '{}' grid",
                frame.col, frame.row, self.sheet.tex_key
            )));
        }
        self.frames.insert(kind, frame);
        Ok(())
    }

    pub fn with_frame(mut self, kind: TileKind, frame: FrameCoord) -> Result<Self> {
        self.insert(kind, frame)?;
        Ok(self)
    }

    pub fn frame(&self, kind: TileKind) -> Option<FrameCoord> {
        self.frames.get(&kind).copied()
    }

    /// Source rectangle in the tileset texture for `kind`.
    pub fn source_rect(&self, kind: TileKind) -> Option<Rectangle> {
        self.frame(kind).map(|frame| self.sheet.frame_rect(frame))
    }

    pub fn tex_key(&self) -> &str {
        &self.sheet.tex_key
    }

    pub fn sheet(&self) -> &Arc<SpriteSheet> {
        &self.sheet
    }
}
