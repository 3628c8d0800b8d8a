//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [map]
//! origin_x = 320
//! origin_y = 120
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::Vector2;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_MAP_ORIGIN_X: f32 = 320.0;
const DEFAULT_MAP_ORIGIN_Y: f32 = 120.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores render resolution, window settings and where the tile map's
/// origin corner sits in world pixels.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// World position of tile (0, 0).
    pub map_origin_x: f32,
    pub map_origin_y: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            map_origin_x: DEFAULT_MAP_ORIGIN_X,
            map_origin_y: DEFAULT_MAP_ORIGIN_Y,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| EngineError::config(format!("Failed to load config file: {}", e)))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [map] section
        if let Some(x) = config.getfloat("map", "origin_x").ok().flatten() {
            self.map_origin_x = x as f32;
        }
        if let Some(y) = config.getfloat("map", "origin_y").ok().flatten() {
            self.map_origin_y = y as f32;
        }

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, map origin=({}, {})",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.map_origin_x,
            self.map_origin_y
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [map] section
        config.set("map", "origin_x", Some(self.map_origin_x.to_string()));
        config.set("map", "origin_y", Some(self.map_origin_y.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| EngineError::config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Get the internal render size.
    pub fn render_size(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }

    /// World position of tile (0, 0).
    pub fn map_origin(&self) -> Vector2 {
        Vector2 {
            x: self.map_origin_x,
            y: self.map_origin_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("critterfarm_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.render_size(), (640, 360));
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 60);
        assert!(config.vsync);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "[window]\nwidth = 800\nvsync = false\n\n[map]\norigin_x = 12.5\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 720);
        assert!(!config.vsync);
        assert_eq!(config.map_origin_x, 12.5);
        assert_eq!(config.map_origin_y, 120.0);
        assert_eq!(config.render_size(), (640, 360));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let mut config = GameConfig::with_path(temp_path("does_not_exist"));
        let err = config.load_from_file().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.render_width = 320;
        saved.render_height = 180;
        saved.target_fps = 30;
        saved.map_origin_y = 64.0;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, saved);
    }
}
