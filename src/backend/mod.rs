//! Render backend abstraction.
//!
//! Everything the engine draws goes through [`RenderBackend`]: one textured
//! sprite cell at a time, or one run of monospace text. The backend owns
//! texture binding, shader activation and blending, so scene code never
//! touches raylib directly.
//!
//! - [`raylibbackend::RaylibBackend`] draws into any raylib drawing scope.
//! - [`RecordingBackend`] records the calls instead of drawing, for tests and
//!   headless checks of draw order.

pub mod raylibbackend;

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::entityshader::EntityShader;

/// Drawing capabilities the engine needs from a graphics backend.
pub trait RenderBackend {
    /// Draw the `source` cell of texture `tex_key` with its top-left corner at
    /// `position`, optionally mirrored and optionally through `shader`.
    fn draw_sprite(
        &mut self,
        tex_key: &str,
        position: Vector2,
        source: Rectangle,
        flip_h: bool,
        flip_v: bool,
        shader: Option<&EntityShader>,
    );

    /// Draw `text` left to right from `position` with a fixed per-glyph advance.
    fn draw_text(&mut self, font_key: &str, text: &str, position: Vector2, color: Color);
}

/// Mirror a source rectangle by negating its extent along the flipped axes.
pub fn flip_source(source: Rectangle, flip_h: bool, flip_v: bool) -> Rectangle {
    Rectangle {
        x: source.x,
        y: source.y,
        width: if flip_h { -source.width } else { source.width },
        height: if flip_v { -source.height } else { source.height },
    }
}

/// One recorded backend call.
#[derive(Debug, Clone)]
pub enum DrawCall {
    Sprite {
        tex_key: String,
        position: Vector2,
        source: Rectangle,
        flip_h: bool,
        flip_v: bool,
        shader: Option<EntityShader>,
    },
    Text {
        font_key: String,
        text: String,
        position: Vector2,
        color: Color,
    },
}

/// Backend that stores every call in order instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded sprite calls as `(tex_key, position, source)`.
    pub fn sprites(&self) -> impl Iterator<Item = (&str, Vector2, Rectangle)> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Sprite {
                tex_key,
                position,
                source,
                ..
            } => Some((tex_key.as_str(), *position, *source)),
            DrawCall::Text { .. } => None,
        })
    }

    /// Shader of each recorded sprite call, in call order.
    pub fn sprite_shaders(&self) -> impl Iterator<Item = Option<&EntityShader>> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Sprite { shader, .. } => Some(shader.as_ref()),
            DrawCall::Text { .. } => None,
        })
    }

    /// Recorded text runs.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            DrawCall::Sprite { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn draw_sprite(
        &mut self,
        tex_key: &str,
        position: Vector2,
        source: Rectangle,
        flip_h: bool,
        flip_v: bool,
        shader: Option<&EntityShader>,
    ) {
        self.calls.push(DrawCall::Sprite {
            tex_key: tex_key.to_string(),
            position,
            source,
            flip_h,
            flip_v,
            shader: shader.cloned(),
        });
    }

    fn draw_text(&mut self, font_key: &str, text: &str, position: Vector2, color: Color) {
        self.calls.push(DrawCall::Text {
            font_key: font_key.to_string(),
            text: text.to_string(),
            position,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_source_negates_extent() {
        let src = Rectangle {
            x: 32.0,
            y: 0.0,
            width: 32.0,
            height: 16.0,
        };
        let both = flip_source(src, true, true);
        assert_eq!((both.x, both.y, both.width, both.height), (32.0, 0.0, -32.0, -16.0));
        let none = flip_source(src, false, false);
        assert_eq!((none.width, none.height), (32.0, 16.0));
    }

    #[test]
    fn test_recording_keeps_call_order() {
        let mut backend = RecordingBackend::new();
        let rect = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 8.0,
            height: 8.0,
        };
        backend.draw_sprite("a", Vector2 { x: 1.0, y: 2.0 }, rect, false, false, None);
        backend.draw_text("font", "hi", Vector2 { x: 0.0, y: 0.0 }, Color::WHITE);
        let outline = EntityShader::outline("outline", true);
        backend.draw_sprite(
            "b",
            Vector2 { x: 3.0, y: 4.0 },
            rect,
            true,
            false,
            Some(&outline),
        );

        let keys: Vec<_> = backend.sprites().map(|(key, _, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(backend.texts().collect::<Vec<_>>(), vec!["hi"]);
        assert_eq!(
            backend.sprite_shaders().collect::<Vec<_>>(),
            vec![None, Some(&outline)]
        );
        assert!(matches!(
            backend.calls[2],
            DrawCall::Sprite { flip_h: true, flip_v: false, .. }
        ));

        backend.clear();
        assert!(backend.calls.is_empty());
    }
}
