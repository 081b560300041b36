//! The board: 16 tiles plus turn bookkeeping.
//!
//! ## Invariants
//!
//! - Exactly 16 tiles, each of the 8 symbols dealt twice
//! - At most 2 pending reveals; input is locked while 2 are pending
//! - `matched_count` is even and never exceeds 16
//! - A matched tile is always revealed
//!
//! A board is built once per session and replaced wholesale on restart.
//! Only the engine mutates it. Deserialized boards are checked against the
//! invariants above before they exist.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::SetupError;
use super::rng::GameRng;
use super::tile::{SymbolId, Tile, TileId, SYMBOL_COUNT, TILE_COUNT};

/// Tiles currently face-up awaiting comparison, in reveal order.
pub type PendingReveal = SmallVec<[TileId; 2]>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    tiles: Vec<Tile>,
    pending: PendingReveal,
    matched_count: u8,
    input_locked: bool,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    tiles: Vec<Tile>,
    pending: PendingReveal,
    matched_count: u8,
    input_locked: bool,
}

impl TryFrom<BoardRepr> for Board {
    type Error = SetupError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let symbols: Vec<SymbolId> = repr.tiles.iter().map(Tile::symbol).collect();
        check_layout(&symbols)?;

        let board = Board {
            tiles: repr.tiles,
            pending: repr.pending,
            matched_count: repr.matched_count,
            input_locked: repr.input_locked,
        };
        board.check_state()?;
        Ok(board)
    }
}

/// 16 symbols, each of the 8 board symbols exactly twice.
fn check_layout(symbols: &[SymbolId]) -> Result<(), SetupError> {
    if symbols.len() != TILE_COUNT {
        return Err(SetupError::TileCount {
            expected: TILE_COUNT,
            found: symbols.len(),
        });
    }

    let mut counts = [0usize; SYMBOL_COUNT];
    for &symbol in symbols {
        match counts.get_mut(symbol.index()) {
            Some(count) => *count += 1,
            None => return Err(SetupError::UnknownSymbol(symbol)),
        }
    }
    for (symbol, count) in SymbolId::all().zip(counts) {
        if count != 2 {
            return Err(SetupError::UnpairedSymbol { symbol, count });
        }
    }

    Ok(())
}

impl Board {
    /// Deal a fresh board: every symbol twice, uniformly shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck: Vec<SymbolId> = SymbolId::all().chain(SymbolId::all()).collect();
        rng.shuffle(&mut deck);
        Self::deal(&deck)
    }

    /// Build a board from a fixed row-major layout.
    ///
    /// Used for replays and tests. The layout must hold 16 symbols with
    /// each of the 8 board symbols exactly twice.
    pub fn from_symbols(symbols: &[SymbolId]) -> Result<Self, SetupError> {
        check_layout(symbols)?;
        Ok(Self::deal(symbols))
    }

    /// Turn bookkeeping agrees with the tiles.
    fn check_state(&self) -> Result<(), SetupError> {
        let invalid = |reason: &'static str| Err(SetupError::InvalidBoard(reason));

        if self.tiles.iter().zip(TileId::all()).any(|(tile, id)| tile.id() != id) {
            return invalid("tiles are not in row-major order");
        }
        if self.tiles.iter().any(|t| t.is_matched() && !t.is_revealed()) {
            return invalid("matched tile is face-down");
        }

        let mut matched_per_symbol = [0usize; SYMBOL_COUNT];
        for tile in self.tiles.iter().filter(|t| t.is_matched()) {
            matched_per_symbol[tile.symbol().index()] += 1;
        }
        if matched_per_symbol.iter().any(|&n| n == 1) {
            return invalid("symbol matched on only one tile");
        }
        if matched_per_symbol.iter().sum::<usize>() != self.matched_count() {
            return invalid("matched count disagrees with matched tiles");
        }

        if self.pending.len() > 2 {
            return invalid("more than two pending reveals");
        }
        if self.pending.len() == 2 && self.pending[0] == self.pending[1] {
            return invalid("tile pending twice");
        }
        for id in &self.pending {
            match self.tile(*id) {
                Some(tile) if tile.is_revealed() && !tile.is_matched() => {}
                _ => return invalid("pending tile is not face-up and unmatched"),
            }
        }
        let face_up_unmatched = self.tiles.iter().filter(|t| t.is_revealed() && !t.is_matched()).count();
        if face_up_unmatched != self.pending.len() {
            return invalid("face-up tile is not pending");
        }

        if self.input_locked != (self.pending.len() == 2) {
            return invalid("input lock disagrees with pending reveals");
        }
        if self.pending.len() == 2 && self.symbol_at(self.pending[0]) == self.symbol_at(self.pending[1]) {
            return invalid("pending pair matches but was not resolved");
        }

        Ok(())
    }

    fn deal(symbols: &[SymbolId]) -> Self {
        let tiles = TileId::all()
            .zip(symbols.iter().copied())
            .map(|(id, symbol)| Tile::new(id, symbol))
            .collect();

        Self {
            tiles,
            pending: PendingReveal::new(),
            matched_count: 0,
            input_locked: false,
        }
    }

    /// Get a tile by ID. `None` for IDs off the board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// All tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Symbols in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.tiles.iter().map(Tile::symbol)
    }

    /// Face-up tiles awaiting comparison, in reveal order.
    #[must_use]
    pub fn pending(&self) -> &[TileId] {
        &self.pending
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count as usize
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// All tiles matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_count() == TILE_COUNT
    }

    /// Tiles still face-down.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_hidden()).count()
    }

    /// Positions of both tiles holding a symbol.
    #[must_use]
    pub fn positions_of(&self, symbol: SymbolId) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|t| t.symbol() == symbol)
            .map(Tile::id)
            .collect()
    }

    // === Engine-only mutation ===

    pub(crate) fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.index()]
    }

    pub(crate) fn symbol_at(&self, id: TileId) -> SymbolId {
        self.tiles[id.index()].symbol()
    }

    pub(crate) fn push_pending(&mut self, id: TileId) -> usize {
        debug_assert!(self.pending.len() < 2, "at most two tiles pending");
        self.pending.push(id);
        self.pending.len()
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending.clear();
    }

    pub(crate) fn set_input_locked(&mut self, locked: bool) {
        self.input_locked = locked;
    }

    pub(crate) fn record_match(&mut self) {
        self.matched_count += 2;
        debug_assert!(self.matched_count() <= TILE_COUNT);
    }
}
