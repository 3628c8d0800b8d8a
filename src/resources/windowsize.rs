//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! game's render resolution. Updated each frame to handle window resizing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle for letterboxed rendering.
    ///
    /// Preserves the game's aspect ratio, fits inside the window and centres
    /// the content, leaving bars on the sides (pillarbox) or top and bottom
    /// (letterbox).
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let game_aspect = game_w / game_h;
        let window_aspect = window_w / window_h;

        if window_aspect > game_aspect {
            // Window is wider than game - pillarbox
            let scale = window_h / game_h;
            let scaled_w = game_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller than game - letterbox
            let scale = window_w / game_w;
            let scaled_h = game_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_aspect_fills_window() {
        let rect = WindowSize { w: 1280, h: 720 }.calculate_letterbox(640, 360);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn test_wide_window_pillarboxes() {
        let rect = WindowSize { w: 1000, h: 360 }.calculate_letterbox(640, 360);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (180.0, 0.0, 640.0, 360.0));
    }

    #[test]
    fn test_tall_window_letterboxes() {
        let rect = WindowSize { w: 640, h: 560 }.calculate_letterbox(640, 360);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 100.0, 640.0, 360.0));
    }
}
