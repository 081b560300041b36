//! Tile and symbol identification.
//!
//! ## Layout
//!
//! Tiles are numbered row-major on the fixed 4x4 grid:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! 12 13 14 15
//! ```
//!
//! ```
//! use pairs_engine::core::TileId;
//!
//! let tile = TileId::at(2, 1);
//! assert_eq!(tile.index(), 9);
//! assert_eq!((tile.row(), tile.col()), (2, 1));
//! ```

use serde::{Deserialize, Serialize};

/// Number of grid rows.
pub const GRID_ROWS: usize = 4;
/// Number of grid columns.
pub const GRID_COLS: usize = 4;
/// Total tiles on a board.
pub const TILE_COUNT: usize = GRID_ROWS * GRID_COLS;
/// Distinct symbols on a board; each is dealt twice.
pub const SYMBOL_COUNT: usize = TILE_COUNT / 2;

/// Position of a tile on the board, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a tile ID from a raw row-major index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Tile at the given grid coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn at(row: usize, col: usize) -> Self {
        assert!(row < GRID_ROWS && col < GRID_COLS, "({row}, {col}) is outside the grid");
        Self((row * GRID_COLS + col) as u8)
    }

    /// Raw row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / GRID_COLS
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % GRID_COLS
    }

    /// Whether this ID names a tile on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.index() < TILE_COUNT
    }

    /// Iterate over every tile position in row-major order.
    pub fn all() -> impl Iterator<Item = TileId> {
        (0..TILE_COUNT as u8).map(TileId)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Opaque symbol identity. Only equality matters to the engine.
///
/// The index points into `GameConfig::symbols`, which gives the symbol a
/// human-readable label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

impl SymbolId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the symbols dealt on every board.
    pub fn all() -> impl Iterator<Item = SymbolId> {
        (0..SYMBOL_COUNT as u8).map(SymbolId)
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// One grid cell holding one symbol instance.
///
/// Owned by the `Board`. Everything outside the crate reads it through
/// accessors; only the engine flips `revealed` and `matched`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    symbol: SymbolId,
    revealed: bool,
    matched: bool,
}

impl Tile {
    pub(crate) fn new(id: TileId, symbol: SymbolId) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.id.row()
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.id.col()
    }

    #[must_use]
    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    /// Face-up, either awaiting comparison or matched.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Face-down and still in play.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.revealed && !self.matched
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn conceal(&mut self) {
        debug_assert!(!self.matched, "matched tiles stay face-up");
        self.revealed = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        debug_assert!(self.revealed, "only revealed tiles can match");
        self.matched = true;
    }
}
