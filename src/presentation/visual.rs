//! Tile visuals and their asset keys.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Board, GameConfig, SymbolId, TileId};
use crate::engine::Notification;

/// Asset key for a face-down tile.
pub const BACK_KEY: &str = "tile_back";
/// Asset key for a face-down tile under the pointer.
pub const BACK_HOVER_KEY: &str = "tile_back_hover";

/// What a tile should currently look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visual {
    Face(SymbolId),
    Back,
    /// Face-down with the pointer over it.
    BackHover,
}

impl Notification {
    /// The tile visual this notification asks for.
    ///
    /// `None` for notifications that are not about a single tile.
    #[must_use]
    pub fn visual(&self) -> Option<(TileId, Visual)> {
        match *self {
            Notification::ShowFace { tile, symbol } => Some((tile, Visual::Face(symbol))),
            Notification::ShowBack { tile } => Some((tile, Visual::Back)),
            Notification::AnnounceWin => None,
        }
    }
}

/// Pointer-over feedback for a tile.
///
/// Only face-down, unmatched tiles react to hover; everything else returns
/// `None` and keeps its current visual. Hover never touches game state.
#[must_use]
pub fn hover_visual(board: &Board, tile: TileId, hovering: bool) -> Option<Visual> {
    let tile = board.tile(tile)?;
    if !tile.is_hidden() {
        return None;
    }
    Some(if hovering { Visual::BackHover } else { Visual::Back })
}

/// Lookup from visual to asset key.
#[derive(Clone, Debug)]
pub struct TextureKeys {
    faces: FxHashMap<SymbolId, String>,
    back: String,
    back_hover: String,
}

impl TextureKeys {
    /// Face keys are the configured symbol labels.
    ///
    /// Labels past the last representable `SymbolId` get no key.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let faces = (0..=u8::MAX)
            .zip(&config.symbols)
            .map(|(i, label)| (SymbolId::new(i), label.clone()))
            .collect();

        Self {
            faces,
            back: BACK_KEY.to_string(),
            back_hover: BACK_HOVER_KEY.to_string(),
        }
    }

    /// Override the face-down keys.
    #[must_use]
    pub fn with_backs(mut self, back: impl Into<String>, back_hover: impl Into<String>) -> Self {
        self.back = back.into();
        self.back_hover = back_hover.into();
        self
    }

    /// Asset key for a visual. `None` for a symbol with no configured label.
    #[must_use]
    pub fn key(&self, visual: &Visual) -> Option<&str> {
        match visual {
            Visual::Face(symbol) => self.faces.get(symbol).map(String::as_str),
            Visual::Back => Some(&self.back),
            Visual::BackHover => Some(&self.back_hover),
        }
    }
}
