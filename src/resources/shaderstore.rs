//! Shader storage resource.
//!
//! Stores loaded fragment shaders keyed by string IDs. Each entry caches
//! uniform locations so per-sprite uniforms cost one hash lookup.
//!
//! Shaders pair with raylib's default vertex shader, so a fragment shader
//! receives `fragTexCoord`, `fragColor`, `texture0` and `colDiffuse`.

use std::ffi::{CString, c_void};
use std::path::Path;

use log::{debug, info};
use raylib::ffi::{self, ShaderUniformDataType};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::entityshader::EntityShader;
use crate::error::{EngineError, Result};

/// Value of a single shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec2 { x: f32, y: f32 },
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Int(value as i32)
    }
}

/// Entry containing a shader and its cached uniform locations.
pub struct ShaderEntry {
    pub shader: Shader,
    /// Cached uniform locations by name. Location -1 means uniform not found.
    pub locations: FxHashMap<String, i32>,
}

impl ShaderEntry {
    fn location(&mut self, name: &str) -> i32 {
        if let Some(loc) = self.locations.get(name) {
            return *loc;
        }
        let loc = match CString::new(name) {
            Ok(cname) => unsafe { ffi::GetShaderLocation(*self.shader, cname.as_ptr()) },
            Err(_) => -1,
        };
        self.locations.insert(name.to_string(), loc);
        loc
    }

    /// Set `name` on the shader program. Unknown uniforms are skipped.
    pub fn set_uniform(&mut self, name: &str, value: UniformValue) {
        let loc = self.location(name);
        if loc < 0 {
            debug!("shader has no uniform '{}'", name);
            return;
        }
        let shader = *self.shader;
        unsafe {
            match value {
                UniformValue::Int(v) => ffi::SetShaderValue(
                    shader,
                    loc,
                    &v as *const i32 as *const c_void,
                    ShaderUniformDataType::SHADER_UNIFORM_INT as i32,
                ),
                UniformValue::Float(v) => ffi::SetShaderValue(
                    shader,
                    loc,
                    &v as *const f32 as *const c_void,
                    ShaderUniformDataType::SHADER_UNIFORM_FLOAT as i32,
                ),
                UniformValue::Vec2 { x, y } => {
                    let v = [x, y];
                    ffi::SetShaderValue(
                        shader,
                        loc,
                        v.as_ptr() as *const c_void,
                        ShaderUniformDataType::SHADER_UNIFORM_VEC2 as i32,
                    )
                }
            }
        }
    }
}

/// Non-Send resource storing loaded shaders.
///
/// This is a `NonSend` resource because shaders are tied to the OpenGL context.
pub struct ShaderStore {
    shaders: FxHashMap<String, ShaderEntry>,
}

impl Default for ShaderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderStore {
    pub fn new() -> Self {
        Self {
            shaders: FxHashMap::default(),
        }
    }

    /// Compile the fragment shader at `fs_path` against raylib's default
    /// vertex shader.
    ///
    /// Needs a live GL context; the file check runs first so a missing file
    /// fails without one.
    pub fn load(&mut self, id: impl Into<String>, fs_path: &str) -> Result<()> {
        if !Path::new(fs_path).is_file() {
            return Err(EngineError::asset(format!("shader not found: {fs_path}")));
        }
        let cpath = CString::new(fs_path)
            .map_err(|e| EngineError::asset(format!("bad shader path {fs_path}: {e}")))?;
        let shader = unsafe {
            let raw = ffi::LoadShader(std::ptr::null(), cpath.as_ptr());
            Shader::from_raw(raw)
        };

        let id = id.into();
        info!("Loaded shader '{}' from {}", id, fs_path);
        self.shaders.insert(
            id,
            ShaderEntry {
                shader,
                locations: FxHashMap::default(),
            },
        );
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ShaderEntry> {
        self.shaders.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ShaderEntry> {
        self.shaders.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shaders.contains_key(id)
    }

    /// Set a uniform that stays on the program for every later draw.
    pub fn set_uniform(&mut self, id: &str, name: &str, value: UniformValue) -> Result<()> {
        let entry = self
            .get_mut(id)
            .ok_or_else(|| EngineError::asset(format!("unknown shader '{id}'")))?;
        entry.set_uniform(name, value);
        Ok(())
    }

    /// Activate the shader referenced by `entity_shader` and apply its
    /// uniforms. Returns `false` (and draws stay unshaded) if the key is
    /// unknown. Pair every `true` with [`ShaderStore::end`].
    pub fn begin(&mut self, entity_shader: &EntityShader) -> bool {
        let Some(entry) = self.shaders.get_mut(entity_shader.shader_key.as_ref()) else {
            debug!("no shader '{}'", entity_shader.shader_key);
            return false;
        };
        unsafe { ffi::BeginShaderMode(*entry.shader) };
        for (name, value) in entity_shader.uniforms.iter() {
            entry.set_uniform(name, *value);
        }
        true
    }

    pub fn end(&mut self) {
        unsafe { ffi::EndShaderMode() };
    }

    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_uniform_is_int() {
        assert_eq!(UniformValue::from(true), UniformValue::Int(1));
        assert_eq!(UniformValue::from(false), UniformValue::Int(0));
    }

    #[test]
    fn test_missing_shader_file_is_asset_error() {
        let mut store = ShaderStore::new();
        let path = std::env::temp_dir().join("critterfarm_missing_outline.fs");
        let err = store
            .load("outline", &path.to_string_lossy())
            .unwrap_err();
        assert!(matches!(err, EngineError::Asset(_)));
        assert!(store.is_empty());
        assert!(!store.contains("outline"));
    }

    #[test]
    fn test_uniform_on_unknown_shader_is_error() {
        let mut store = ShaderStore::new();
        assert!(
            store
                .set_uniform("outline", "show_outline", true.into())
                .is_err()
        );
    }
}
