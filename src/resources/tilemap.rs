//! Isometric tile map resource.
//!
//! A square `width × width` grid of [`TileKind`]s stored row-major
//! (`index = col + row * width`). The map knows nothing about textures:
//! turning a kind into an atlas frame is the job of
//! [`TileAtlas`](crate::resources::tileatlas::TileAtlas).
//!
//! # Projection
//!
//! Grid coordinates map to screen offsets with a 2:1 diamond projection:
//!
//! ```text
//! screen = (16, 8) * col + (-16, 8) * row
//! ```
//!
//! # Draw order
//!
//! Tiles further down the screen overlap the ones above them, and the
//! renderer has no depth buffer, so cells must be painted back to front.
//! [`TileMap::draw_order`] sweeps the anti-diagonals (`col + row` constant)
//! outward from the origin corner, ascending `col` inside each diagonal.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Half the on-screen width of a tile diamond, in pixels.
pub const TILE_HALF_WIDTH: f32 = 16.0;
/// Half the on-screen height of a tile diamond, in pixels.
pub const TILE_HALF_HEIGHT: f32 = 8.0;

/// Contents of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    /// Nothing is drawn for this cell.
    #[default]
    None,
    Dirt,
    Water,
}

impl TileKind {
    /// Every declared kind, `None` included.
    pub const ALL: [TileKind; 3] = [TileKind::None, TileKind::Dirt, TileKind::Water];

    pub fn is_empty(self) -> bool {
        self == TileKind::None
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileMap {
    width: u32,
    cells: Vec<TileKind>,
}

impl TileMap {
    /// Create a `width × width` map with every cell set to `fill`.
    pub fn new(width: u32, fill: TileKind) -> Self {
        let len = width as usize * width as usize;
        Self {
            width,
            cells: vec![fill; len],
        }
    }

    /// Side length of the grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of cells (`width * width`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, col: u32, row: u32) -> bool {
        col < self.width && row < self.width
    }

    /// Checked read.
    pub fn get(&self, col: u32, row: u32) -> Result<TileKind> {
        self.check(col, row)?;
        Ok(self.tile(col, row))
    }

    /// Checked write.
    pub fn set(&mut self, col: u32, row: u32, kind: TileKind) -> Result<()> {
        self.check(col, row)?;
        self.set_tile(col, row, kind);
        Ok(())
    }

    /// Read without checking the coordinate against the grid.
    ///
    /// The caller must ensure `col < width` and `row < width`. A column past
    /// the edge silently addresses a cell on a following row; only an index
    /// past the end of the whole grid panics.
    pub fn tile(&self, col: u32, row: u32) -> TileKind {
        self.cells[self.index(col, row)]
    }

    /// Write without checking the coordinate against the grid.
    ///
    /// Same precondition as [`TileMap::tile`].
    pub fn set_tile(&mut self, col: u32, row: u32, kind: TileKind) {
        let index = self.index(col, row);
        self.cells[index] = kind;
    }

    /// Overwrite every cell with `kind`.
    pub fn fill(&mut self, kind: TileKind) {
        self.cells.fill(kind);
    }

    /// Screen offset of the tile at `(col, row)` relative to the map origin.
    pub fn to_screen(col: u32, row: u32) -> Vector2 {
        let col = col as f32;
        let row = row as f32;
        Vector2 {
            x: (col - row) * TILE_HALF_WIDTH,
            y: (col + row) * TILE_HALF_HEIGHT,
        }
    }

    /// Back-to-front traversal of every cell, empty ones included.
    pub fn draw_order(&self) -> DrawOrder {
        DrawOrder::new(self.width)
    }

    /// [`TileMap::draw_order`] joined with cell contents, skipping
    /// [`TileKind::None`].
    pub fn visible_tiles(&self) -> impl Iterator<Item = (u32, u32, TileKind)> + '_ {
        self.draw_order()
            .map(|(col, row)| (col, row, self.tile(col, row)))
            .filter(|(_, _, kind)| !kind.is_empty())
    }

    fn index(&self, col: u32, row: u32) -> usize {
        col as usize + row as usize * self.width as usize
    }

    fn check(&self, col: u32, row: u32) -> Result<()> {
        if self.in_bounds(col, row) {
            Ok(())
        } else {
            Err(EngineError::OutOfRange {
                col,
                row,
                width: self.width,
            })
        }
    }
}

/// Iterator over the cells of a square grid in isometric painter's order.
///
/// Depends only on the grid width, so it can be cloned or rebuilt every
/// frame at no cost beyond the iteration itself.
#[derive(Debug, Clone)]
pub struct DrawOrder {
    width: u32,
    diagonal: u32,
    col: u32,
    remaining: usize,
}

impl DrawOrder {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            diagonal: 0,
            col: 0,
            remaining: width as usize * width as usize,
        }
    }

    fn first_col(&self, diagonal: u32) -> u32 {
        (diagonal + 1).saturating_sub(self.width)
    }

    fn last_col(&self, diagonal: u32) -> u32 {
        diagonal.min(self.width - 1)
    }
}

impl Iterator for DrawOrder {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = (self.col, self.diagonal - self.col);
        self.remaining -= 1;

        if self.col < self.last_col(self.diagonal) {
            self.col += 1;
        } else if self.remaining > 0 {
            self.diagonal += 1;
            self.col = self.first_col(self.diagonal);
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DrawOrder {}

impl std::iter::FusedIterator for DrawOrder {}
