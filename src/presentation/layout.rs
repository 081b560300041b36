//! Grid geometry in logical pixels.

use serde::{Deserialize, Serialize};

use crate::core::{TileId, GRID_COLS, GRID_ROWS};

/// Side of one grid cell.
pub const DEFAULT_TILE_SIZE: f32 = 120.0;
/// Gap between a cell's edge and its clickable box, summed over both sides.
pub const DEFAULT_TILE_MARGIN: f32 = 14.0;

/// Where tiles sit on the canvas.
///
/// Two variants exist: `compact()` fills the canvas edge to edge,
/// `bordered()` adds half a tile of padding on every side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub tile_size: f32,
    pub margin: f32,
    pub border: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::compact()
    }
}

impl GridLayout {
    #[must_use]
    pub fn compact() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            margin: DEFAULT_TILE_MARGIN,
            border: 0.0,
        }
    }

    #[must_use]
    pub fn bordered() -> Self {
        Self {
            border: DEFAULT_TILE_SIZE * 0.5,
            ..Self::compact()
        }
    }

    /// Canvas width and height.
    #[must_use]
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.tile_size * GRID_COLS as f32 + 2.0 * self.border,
            self.tile_size * GRID_ROWS as f32 + 2.0 * self.border,
        )
    }

    /// Side of the clickable box drawn inside each cell.
    #[must_use]
    pub fn inner_size(&self) -> f32 {
        self.tile_size - self.margin
    }

    /// Center of a tile.
    #[must_use]
    pub fn center(&self, tile: TileId) -> (f32, f32) {
        let half = self.tile_size / 2.0;
        (
            self.border + tile.col() as f32 * self.tile_size + half,
            self.border + tile.row() as f32 * self.tile_size + half,
        )
    }

    /// Tile under a pointer position.
    ///
    /// Only the inner box counts; the margin between boxes hits nothing.
    #[must_use]
    pub fn tile_at(&self, x: f32, y: f32) -> Option<TileId> {
        let gx = x - self.border;
        let gy = y - self.border;
        if gx < 0.0 || gy < 0.0 {
            return None;
        }

        let col = (gx / self.tile_size) as usize;
        let row = (gy / self.tile_size) as usize;
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }

        let tile = TileId::at(row, col);
        let (cx, cy) = self.center(tile);
        let half_inner = self.inner_size() / 2.0;
        ((x - cx).abs() <= half_inner && (y - cy).abs() <= half_inner).then_some(tile)
    }
}
