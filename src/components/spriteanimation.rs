//! Sprite animation playback component.
//!
//! [`SpriteAnimation`] is the per-entity clock that walks through the frame
//! sequence of one animation registered on a shared
//! [`SpriteSheet`](crate::resources::spritesheet::SpriteSheet). Its state is
//! the triple `(animation, frame_index, elapsed)`, advanced continuously by
//! [`SpriteAnimation::advance`]; there is no enumerated state machine.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use raylib::prelude::Rectangle;

use crate::error::Result;
use crate::resources::spritesheet::{AnimationData, AnimationId, FrameCoord, SpriteSheet};

#[derive(Debug, Clone, Component)]
pub struct SpriteAnimation {
    sheet: Arc<SpriteSheet>,
    animation: AnimationId,
    frame_index: usize,
    elapsed: f32,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl SpriteAnimation {
    /// Bind a clock to `sheet`, starting `animation` at its first frame.
    pub fn new(sheet: Arc<SpriteSheet>, animation: AnimationId) -> Result<Self> {
        sheet.animation(animation)?;
        Ok(Self {
            sheet,
            animation,
            frame_index: 0,
            elapsed: 0.0,
            flip_h: false,
            flip_v: false,
        })
    }

    pub fn with_flip(mut self, flip_h: bool, flip_v: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self
    }

    /// Switch to `animation`.
    ///
    /// Selecting the animation that is already playing keeps the current frame
    /// and elapsed time. Selecting a different one restarts from frame 0.
    pub fn set_animation(&mut self, animation: AnimationId) -> Result<()> {
        self.sheet.animation(animation)?;
        if animation != self.animation {
            self.animation = animation;
            self.frame_index = 0;
            self.elapsed = 0.0;
        }
        Ok(())
    }

    /// Switch to `animation` and always restart it from frame 0.
    pub fn restart(&mut self, animation: AnimationId) -> Result<()> {
        self.sheet.animation(animation)?;
        self.animation = animation;
        self.frame_index = 0;
        self.elapsed = 0.0;
        Ok(())
    }

    /// Accumulate `dt` seconds and step over every frame boundary crossed.
    ///
    /// A single long `dt` skips as many frames as it spans, wrapping over the
    /// frame sequence, in constant time. Negative and non-finite deltas are
    /// ignored.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() {
            log::warn!("SpriteAnimation: ignoring non-finite delta {dt}");
            return;
        }
        if dt <= 0.0 {
            return;
        }

        let (frame_duration, frame_count) = {
            let data = self.data();
            (data.frame_duration, data.frame_count())
        };

        self.elapsed += dt;
        if self.elapsed < frame_duration {
            return;
        }

        let steps = (self.elapsed / frame_duration).floor();
        let skipped = (steps as u64 % frame_count as u64) as usize;
        self.frame_index = (self.frame_index + skipped) % frame_count;

        let rest = self.elapsed - steps * frame_duration;
        self.elapsed = if (0.0..frame_duration).contains(&rest) {
            rest
        } else {
            0.0
        };
    }

    /// Frame coordinate currently shown.
    pub fn current_frame(&self) -> FrameCoord {
        self.data().frames[self.frame_index]
    }

    /// Source rectangle of the current frame in the sheet texture.
    ///
    /// Flip flags are not applied here; the backend mirrors at draw time.
    pub fn source_rect(&self) -> Rectangle {
        self.sheet.frame_rect(self.current_frame())
    }

    pub fn animation(&self) -> AnimationId {
        self.animation
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Seconds accumulated since the last frame change.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn sheet(&self) -> &Arc<SpriteSheet> {
        &self.sheet
    }

    fn data(&self) -> &AnimationData {
        match self.sheet.animation(self.animation) {
            Ok(data) => data,
            Err(e) => unreachable!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::resources::spritesheet::FrameSize;

    const EPSILON: f32 = 1e-4;

    struct Ant {
        sheet: Arc<SpriteSheet>,
        idle: AnimationId,
        walk: AnimationId,
    }

    fn ant() -> Ant {
        let mut sheet = SpriteSheet::new(
            "ant",
            416,
            96,
            FrameSize::Count {
                hframes: 13,
                vframes: 3,
            },
        )
        .unwrap();
        let idle = sheet
            .register_animation(4.0, &[FrameCoord::new(1, 1), FrameCoord::new(2, 1)])
            .unwrap();
        let walk = sheet
            .register_animation(
                10.0,
                &[
                    FrameCoord::new(3, 1),
                    FrameCoord::new(4, 1),
                    FrameCoord::new(5, 1),
                    FrameCoord::new(6, 1),
                ],
            )
            .unwrap();
        Ant {
            sheet: Arc::new(sheet),
            idle,
            walk,
        }
    }

    #[test]
    fn test_starts_on_first_frame() {
        let ant = ant();
        let anim = SpriteAnimation::new(ant.sheet, ant.walk).unwrap();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.current_frame(), FrameCoord::new(3, 1));
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn test_advance_below_duration_keeps_frame() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.idle).unwrap();
        anim.advance(0.2);
        assert_eq!(anim.frame_index(), 0);
        assert!((anim.elapsed() - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_advance_crosses_one_frame() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.idle).unwrap();
        anim.advance(0.2);
        anim.advance(0.1);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.current_frame(), FrameCoord::new(2, 1));
        assert!((anim.elapsed() - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_large_delta_skips_multiple_frames() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.walk).unwrap();
        // 0.35s at 10 fps spans three frame durations.
        anim.advance(0.35);
        assert_eq!(anim.frame_index(), 3);
        assert_eq!(anim.current_frame(), FrameCoord::new(6, 1));
        assert!((anim.elapsed() - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_advance_matches_floor_mod_law() {
        let ant = ant();
        for dt in [0.0_f32, 0.05, 0.13, 0.27, 0.55, 1.04, 1.33, 2.71] {
            let mut anim = SpriteAnimation::new(Arc::clone(&ant.sheet), ant.walk).unwrap();
            anim.advance(dt);
            let frame_duration = 0.1_f32;
            let steps = (dt / frame_duration).floor() as usize;
            assert_eq!(anim.frame_index(), steps % 4, "dt = {dt}");
            let expected_elapsed = dt - steps as f32 * frame_duration;
            assert!(
                (anim.elapsed() - expected_elapsed).abs() < 1e-3,
                "dt = {dt}: elapsed {} vs {}",
                anim.elapsed(),
                expected_elapsed
            );
            assert!(anim.elapsed() >= 0.0 && anim.elapsed() < frame_duration);
        }
    }

    #[test]
    fn test_advance_wraps_around() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.idle).unwrap();
        anim.advance(0.25);
        anim.advance(0.25);
        assert_eq!(anim.frame_index(), 0);
        anim.advance(0.25);
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_negative_and_non_finite_delta_ignored() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.idle).unwrap();
        anim.advance(0.1);
        anim.advance(-5.0);
        anim.advance(f32::NAN);
        anim.advance(f32::INFINITY);
        assert_eq!(anim.frame_index(), 0);
        assert!((anim.elapsed() - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_set_animation_to_other_resets() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.walk).unwrap();
        anim.advance(0.25);
        assert_eq!(anim.frame_index(), 2);

        anim.set_animation(ant.idle).unwrap();
        assert_eq!(anim.animation(), ant.idle);
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn test_set_animation_to_same_is_noop() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.walk).unwrap();
        anim.advance(0.25);

        anim.set_animation(ant.walk).unwrap();
        assert_eq!(anim.frame_index(), 2);
        assert!((anim.elapsed() - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_restart_always_resets() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.walk).unwrap();
        anim.advance(0.25);

        anim.restart(ant.walk).unwrap();
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.elapsed(), 0.0);
    }

    #[test]
    fn test_unknown_animation_is_rejected() {
        let ant = ant();
        // Same layout as the ant sheet, so the foreign handle's index exists here too.
        let mut other = SpriteSheet::new(
            "other",
            416,
            96,
            FrameSize::Count {
                hframes: 13,
                vframes: 3,
            },
        )
        .unwrap();
        let foreign = other.register_animation(1.0, &[FrameCoord::new(1, 1)]).unwrap();
        assert_eq!(foreign.index(), ant.idle.index());

        assert!(SpriteAnimation::new(Arc::clone(&ant.sheet), foreign).is_err());

        let mut anim = SpriteAnimation::new(ant.sheet, ant.walk).unwrap();
        anim.advance(0.15);
        let err = anim.set_animation(foreign).unwrap_err();
        assert!(matches!(err, EngineError::UnknownAnimation { id: 0, .. }));
        assert!(err.is_precondition_violation());
        // State untouched by the failed switch.
        assert_eq!(anim.animation(), ant.walk);
        assert_eq!(anim.frame_index(), 1);
        assert!(anim.restart(foreign).is_err());
    }

    fn expected_frame(dt: f32, frame_duration: f32, frame_count: usize) -> usize {
        ((dt / frame_duration).floor() as u64 % frame_count as u64) as usize
    }

    #[test]
    fn test_huge_delta_returns_with_floor_mod_frame() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(Arc::clone(&ant.sheet), ant.walk).unwrap();
        let frame_duration = ant.sheet.animation(ant.walk).unwrap().frame_duration;

        anim.advance(1.0e9);

        assert_eq!(anim.frame_index(), expected_frame(1.0e9, frame_duration, 4));
        assert!(anim.elapsed() >= 0.0 && anim.elapsed() < frame_duration);
    }

    #[test]
    fn test_high_fps_long_delta() {
        let mut sheet = SpriteSheet::new(
            "ant",
            416,
            96,
            FrameSize::Count {
                hframes: 13,
                vframes: 3,
            },
        )
        .unwrap();
        let blink = sheet
            .register_animation(
                1.0e6,
                &[
                    FrameCoord::new(0, 0),
                    FrameCoord::new(1, 0),
                    FrameCoord::new(2, 0),
                ],
            )
            .unwrap();
        let sheet = Arc::new(sheet);
        let frame_duration = sheet.animation(blink).unwrap().frame_duration;
        let mut anim = SpriteAnimation::new(sheet, blink).unwrap();

        for dt in [16.0_f32, 16_000.0] {
            let mut fresh = anim.clone();
            fresh.advance(dt);
            assert_eq!(fresh.frame_index(), expected_frame(dt, frame_duration, 3), "dt = {dt}");
            assert!(fresh.elapsed() >= 0.0 && fresh.elapsed() < frame_duration);
        }

        anim.advance(16.0);
        anim.advance(16.0);
        assert!(anim.frame_index() < 3);
    }

    #[test]
    fn test_flip_does_not_affect_frame_selection() {
        let ant = ant();
        let mut anim = SpriteAnimation::new(ant.sheet, ant.walk)
            .unwrap()
            .with_flip(true, false);
        anim.advance(0.1);
        assert_eq!(anim.current_frame(), FrameCoord::new(4, 1));
        assert!(anim.flip_h);
        let rect = anim.source_rect();
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (128.0, 32.0, 32.0, 32.0));
    }
}
