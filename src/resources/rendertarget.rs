//! Render target resource for fixed-resolution rendering.
//!
//! The scene is painted into a texture at the game's internal resolution,
//! then that texture is scaled into the window with
//! [`WindowSize::calculate_letterbox`](crate::resources::windowsize::WindowSize::calculate_letterbox).

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::error::{EngineError, Result};

/// Render texture at the game's internal resolution.
///
/// NonSend: `RenderTexture2D` owns GPU resources tied to the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    /// Internal render width in pixels.
    pub game_width: u32,
    /// Internal render height in pixels.
    pub game_height: u32,
}

impl RenderTarget {
    /// Create a render target with nearest-neighbour sampling, so scaled pixel
    /// art stays sharp.
    pub fn new(rl: &mut RaylibHandle, th: &RaylibThread, width: u32, height: u32) -> Result<Self> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| EngineError::asset(format!("Failed to create render texture: {}", e)))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle covering the whole texture.
    ///
    /// The height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted render texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
