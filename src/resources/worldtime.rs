//! Simulation time resource.
//!
//! Updated once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time) from the
//! window's frame time. `delta` is what animation clocks consume.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
    /// Frames simulated since startup.
    pub frame_count: u64,
    /// Frames counted over the last full second.
    pub fps: u32,
    frames_this_second: u32,
    second_timer: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            fps: 0,
            frames_this_second: 0,
            second_timer: 0.0,
        }
    }
}

impl WorldTime {
    /// Count one frame that took `real_dt` unscaled seconds.
    ///
    /// Publishes the frame count to `fps` each time a full second of real time
    /// has accumulated, carrying the remainder into the next second.
    pub fn tick_fps(&mut self, real_dt: f32) {
        self.frames_this_second += 1;
        self.second_timer += real_dt;
        if self.second_timer >= 1.0 {
            self.fps = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_timer -= 1.0;
            if self.second_timer >= 1.0 {
                // A stall longer than a second: restart the window.
                self.second_timer = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_published_after_one_second() {
        let mut wt = WorldTime::default();
        for _ in 0..59 {
            wt.tick_fps(1.0 / 60.0);
        }
        assert_eq!(wt.fps, 0);
        // Push over the boundary regardless of rounding.
        wt.tick_fps(0.05);
        assert_eq!(wt.fps, 60);
    }

    #[test]
    fn test_fps_long_stall() {
        let mut wt = WorldTime::default();
        wt.tick_fps(3.5);
        assert_eq!(wt.fps, 1);
        wt.tick_fps(0.5);
        assert_eq!(wt.fps, 1);
        wt.tick_fps(0.6);
        assert_eq!(wt.fps, 2);
    }
}
