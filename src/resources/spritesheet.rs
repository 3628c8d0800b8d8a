//! Sprite sheet definitions and registry.
//!
//! A [`SpriteSheet`] slices one texture into a grid of equally sized frames
//! and owns the immutable animation table for that texture. Animations are
//! registered once during setup and addressed afterwards through the
//! [`AnimationId`] handle returned at registration time.
//!
//! Sheets are shared read-only through [`Arc`], so the
//! [`SpriteAnimation`](crate::components::spriteanimation::SpriteAnimation)
//! clocks of many entities can point at the same table.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{EngineError, Result};

/// Column/row position of a frame inside a sprite sheet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FrameCoord {
    pub col: u32,
    pub row: u32,
}

impl FrameCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// How a texture is sliced into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSize {
    /// The texture holds `hframes × vframes` frames.
    Count { hframes: u32, vframes: u32 },
    /// Every frame is `width × height` pixels.
    Pixels { width: u32, height: u32 },
}

static NEXT_SHEET_ID: AtomicU32 = AtomicU32::new(0);

/// Handle to an animation registered on a [`SpriteSheet`].
///
/// Only [`SpriteSheet::register_animation`] creates handles, and a handle
/// carries the identity of the sheet that issued it. Animation tables are
/// append-only, so a handle accepted by [`SpriteSheet::animation`] once stays
/// valid for the life of that sheet. `SpriteAnimation` checks its handle when
/// it is set and relies on this afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId {
    sheet: u32,
    index: usize,
}

impl AnimationId {
    /// Position of the animation in its sheet's table.
    pub fn index(self) -> usize {
        self.index
    }
}

/// Frame sequence and timing of one animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationData {
    /// Frames in playback order. Never empty.
    pub frames: SmallVec<[FrameCoord; 8]>,
    /// Seconds each frame stays on screen. Always positive.
    pub frame_duration: f32,
}

impl AnimationData {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// A texture sliced into a frame grid plus its animation table.
#[derive(Debug)]
pub struct SpriteSheet {
    id: u32,
    /// Texture key in [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub tex_key: Arc<str>,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Frames per row.
    pub columns: u32,
    /// Frames per column.
    pub rows: u32,
    animations: Vec<AnimationData>,
}

impl SpriteSheet {
    /// Slice a `width × height` texture according to `frame_size`.
    ///
    /// Fails if the slicing would produce zero-sized frames or no frames at all.
    pub fn new(
        tex_key: impl Into<Arc<str>>,
        width: u32,
        height: u32,
        frame_size: FrameSize,
    ) -> Result<Self> {
        let tex_key = tex_key.into();
        let (frame_width, frame_height) = match frame_size {
            FrameSize::Count { hframes, vframes } => {
                if hframes == 0 || vframes == 0 {
                    return Err(EngineError::InvalidFrameSize(format!(
                        "'{tex_key}': frame count {hframes}x{vframes}"
                    )));
                }
                (width / hframes, height / vframes)
            }
            FrameSize::Pixels {
                width: fw,
                height: fh,
            } => (fw, fh),
        };

        if frame_width == 0 || frame_height == 0 {
            return Err(EngineError::InvalidFrameSize(format!(
                "'{tex_key}': {width}x{height} texture gives {frame_width}x{frame_height} frames"
            )));
        }

        let columns = width / frame_width;
        let rows = height / frame_height;
        if columns == 0 || rows == 0 {
            return Err(EngineError::InvalidFrameSize(format!(
                "'{tex_key}': {frame_width}x{frame_height} frames do not fit a {width}x{height} texture"
            )));
        }

        Ok(Self {
            id: NEXT_SHEET_ID.fetch_add(1, Ordering::Relaxed),
            tex_key,
            width,
            height,
            frame_width,
            frame_height,
            columns,
            rows,
            animations: Vec::new(),
        })
    }

    /// Register an animation playing `frames` at `fps` frames per second.
    ///
    /// The returned handle is the only way to refer to the animation later.
    pub fn register_animation(&mut self, fps: f32, frames: &[FrameCoord]) -> Result<AnimationId> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(EngineError::InvalidAnimation(format!(
                "'{}': fps must be positive, got {fps}",
                self.tex_key
            )));
        }
        if frames.is_empty() {
            return Err(EngineError::InvalidAnimation(format!(
                "'{}': animation has no frames",
                self.tex_key
            )));
        }
        if let Some(bad) = frames.iter().find(|f| !self.contains_frame(**f)) {
            return Err(EngineError::InvalidAnimation(format!(
                "'{}': frame ({}, {}) is outside the {}x{} grid",
                self.tex_key, bad.col, bad.row, self.columns, self.rows
            )));
        }

        let id = AnimationId {
            sheet: self.id,
            index: self.animations.len(),
        };
        self.animations.push(AnimationData {
            frames: SmallVec::from_slice(frames),
            frame_duration: 1.0 / fps,
        });
        Ok(id)
    }

    /// Look up a registered animation.
    ///
    /// Handles issued by another sheet are rejected even when their index
    /// exists in this table.
    pub fn animation(&self, id: AnimationId) -> Result<&AnimationData> {
        let found = if id.sheet == self.id {
            self.animations.get(id.index)
        } else {
            None
        };
        found.ok_or_else(|| EngineError::UnknownAnimation {
            id: id.index,
            sheet: self.tex_key.to_string(),
        })
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Whether `coord` addresses a frame inside the grid.
    pub fn contains_frame(&self, coord: FrameCoord) -> bool {
        coord.col < self.columns && coord.row < self.rows
    }

    /// Source rectangle of `coord` in texture pixels.
    pub fn frame_rect(&self, coord: FrameCoord) -> Rectangle {
        let w = self.frame_width as f32;
        let h = self.frame_height as f32;
        Rectangle {
            x: coord.col as f32 * w,
            y: coord.row as f32 * h,
            width: w,
            height: h,
        }
    }
}

/// Registry of sprite sheets keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct SpriteSheetStore {
    sheets: FxHashMap<String, Arc<SpriteSheet>>,
}

impl SpriteSheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finished sheet and return the shared handle to it.
    pub fn insert(&mut self, key: impl Into<String>, sheet: SpriteSheet) -> Arc<SpriteSheet> {
        let sheet = Arc::new(sheet);
        self.sheets.insert(key.into(), Arc::clone(&sheet));
        sheet
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Arc<SpriteSheet>> {
        self.sheets.get(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn clear(&mut self) {
        self.sheets.clear();
    }
}
