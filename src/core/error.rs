//! Setup errors.
//!
//! Only board and configuration construction can fail. Gameplay input is
//! never an error; see `engine::ClickOutcome`.

use thiserror::Error;

use super::tile::SymbolId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("expected {expected} symbols, found {found}")]
    SymbolCount { expected: usize, found: usize },
    #[error("symbol label {0:?} appears more than once")]
    DuplicateSymbol(String),
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("{symbol} appears {count} times, expected exactly 2")]
    UnpairedSymbol { symbol: SymbolId, count: usize },
    #[error("{0} is not one of the board symbols")]
    UnknownSymbol(SymbolId),
    #[error("inconsistent board: {0}")]
    InvalidBoard(&'static str),
}
