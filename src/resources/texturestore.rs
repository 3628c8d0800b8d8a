//! Texture store resource.
//!
//! Non-send: raylib textures live on the GPU and must be touched from the
//! main thread only. Insert with `insert_non_send_resource` and read through
//! `NonSend<TextureStore>`.

use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{EngineError, Result};

#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the image at `path` into a texture and return its size in pixels.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        id: impl Into<String>,
        path: &str,
    ) -> Result<(u32, u32)> {
        let texture = rl
            .load_texture(th, path)
            .map_err(|e| EngineError::asset(format!("failed to load texture {path}: {e}")))?;
        let size = (texture.width as u32, texture.height as u32);
        let id = id.into();
        log::info!("Loaded texture '{}' from {} ({}x{})", id, path, size.0, size.1);
        self.map.insert(id, texture);
        Ok(size)
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
