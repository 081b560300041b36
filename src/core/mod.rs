//! Core types: tiles, symbols, the board, configuration, RNG, setup errors.
//!
//! Nothing here knows about time or presentation. The engine drives all
//! board mutation.

pub mod tile;
pub mod board;
pub mod config;
pub mod rng;
pub mod error;

pub use tile::{SymbolId, Tile, TileId, GRID_COLS, GRID_ROWS, SYMBOL_COUNT, TILE_COUNT};
pub use board::{Board, PendingReveal};
pub use config::{GameConfig, DEFAULT_MISMATCH_DELAY, DEFAULT_WIN_DELAY};
pub use rng::{GameRng, GameRngState};
pub use error::SetupError;
