//! Font store resource and monospace glyph layout.
//!
//! Text is drawn one glyph at a time on a fixed grid: every character
//! advances the pen by the font's glyph cell width, whatever its actual ink
//! width. Only printable ASCII (`' '..='~'`) has glyphs; other characters are
//! skipped but still advance the pen so columns stay aligned.
//!
//! Note: [`FontStore`] is a non-send resource because raylib fonts must be
//! accessed from the main thread only.

use std::ffi::CString;

use raylib::ffi;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{EngineError, Result};

/// First character with a glyph cell.
pub const FIRST_CHAR: char = ' ';
/// Last character with a glyph cell.
pub const LAST_CHAR: char = '~';

/// Fixed glyph cell size of a monospace font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Rasterisation size in pixels.
    pub size: f32,
    /// Horizontal advance per character.
    pub glyph_width: f32,
    pub glyph_height: f32,
}

impl FontMetrics {
    pub fn new(size: f32, glyph_width: f32, glyph_height: f32) -> Self {
        Self {
            size,
            glyph_width,
            glyph_height,
        }
    }

    pub fn has_glyph(ch: char) -> bool {
        (FIRST_CHAR..=LAST_CHAR).contains(&ch)
    }

    /// Width of `text` once laid out.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }

    /// Pen position of every drawable glyph of `text`, left to right from
    /// `origin`.
    pub fn glyph_layout<'a>(
        &self,
        text: &'a str,
        origin: Vector2,
    ) -> impl Iterator<Item = (char, Vector2)> + 'a {
        let advance = self.glyph_width;
        text.chars()
            .enumerate()
            .filter(|(_, ch)| Self::has_glyph(*ch))
            .map(move |(i, ch)| {
                (
                    ch,
                    Vector2 {
                        x: origin.x + i as f32 * advance,
                        y: origin.y,
                    },
                )
            })
    }
}

/// A raylib font together with its glyph cell metrics.
pub struct LoadedFont {
    pub font: Font,
    pub metrics: FontMetrics,
}

/// Map of font keys to loaded fonts.
///
/// This is a non-send resource; use `NonSend<FontStore>` in system parameters.
pub struct FontStore {
    fonts: FxHashMap<String, LoadedFont>,
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStore {
    pub fn new() -> Self {
        Self {
            fonts: FxHashMap::default(),
        }
    }

    /// Load a TTF at `size` pixels and measure its glyph cell.
    ///
    /// The cell width is the advance of a wide reference glyph, which for a
    /// monospace face is the advance of every glyph.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        id: impl Into<String>,
        path: &str,
        size: u32,
    ) -> Result<FontMetrics> {
        let font = rl
            .load_font_ex(th, path, size as i32, None)
            .map_err(|e| EngineError::asset(format!("failed to load font {path}: {e}")))?;

        let reference = CString::new("M").map_err(|e| EngineError::asset(e.to_string()))?;
        let cell = unsafe { ffi::MeasureTextEx(*font, reference.as_ptr(), size as f32, 0.0) };
        let metrics = FontMetrics::new(size as f32, cell.x.ceil(), cell.y.ceil());

        let id = id.into();
        log::info!(
            "Loaded font '{}' from {} ({}x{} glyph cell)",
            id,
            path,
            metrics.glyph_width,
            metrics.glyph_height
        );
        self.fonts.insert(id, LoadedFont { font, metrics });
        Ok(metrics)
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&LoadedFont> {
        self.fonts.get(id.as_ref())
    }

    pub fn clear(&mut self) {
        self.fonts.clear();
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
