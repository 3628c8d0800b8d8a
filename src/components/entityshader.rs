//! Per-entity shader component.
//!
//! Attach [`EntityShader`] to a sprite entity to draw it through a shader from
//! the [`ShaderStore`](crate::resources::shaderstore::ShaderStore). Uniforms
//! listed here are applied right before the sprite is drawn, so entities can
//! share one shader program with different settings.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

use crate::resources::shaderstore::UniformValue;

/// Uniform that switches the outline on in the outline shader.
pub const SHOW_OUTLINE: &str = "show_outline";

#[derive(Component, Debug, Clone, PartialEq)]
pub struct EntityShader {
    /// Key into the shader store.
    pub shader_key: Arc<str>,
    pub uniforms: FxHashMap<Arc<str>, UniformValue>,
}

impl EntityShader {
    pub fn new(shader_key: impl Into<Arc<str>>) -> Self {
        Self {
            shader_key: shader_key.into(),
            uniforms: FxHashMap::default(),
        }
    }

    pub fn with_uniform(mut self, name: impl Into<Arc<str>>, value: UniformValue) -> Self {
        self.uniforms.insert(name.into(), value);
        self
    }

    /// Outline shader with the outline on or off.
    pub fn outline(shader_key: impl Into<Arc<str>>, show: bool) -> Self {
        Self::new(shader_key).with_uniform(SHOW_OUTLINE, show.into())
    }

    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }
}
