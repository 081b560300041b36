//! Outbound notifications to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{SymbolId, TileId};

/// Receiver for the engine's visual-update requests.
///
/// Hosts implement this to drive their renderer. The engine calls it
/// synchronously from `handle_tile_click` and `advance`; it never reads
/// anything back.
pub trait Presenter {
    /// Turn a tile face-up showing `symbol`.
    fn show_face(&mut self, tile: TileId, symbol: SymbolId);

    /// Turn a tile face-down.
    fn show_back(&mut self, tile: TileId);

    /// Every pair has been found.
    fn announce_win(&mut self);
}

/// A recorded presenter call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    ShowFace { tile: TileId, symbol: SymbolId },
    ShowBack { tile: TileId },
    AnnounceWin,
}

impl Notification {
    /// The tile this notification concerns, if any.
    #[must_use]
    pub fn tile(&self) -> Option<TileId> {
        match self {
            Notification::ShowFace { tile, .. } | Notification::ShowBack { tile } => Some(*tile),
            Notification::AnnounceWin => None,
        }
    }
}

/// Recording presenter, for tests and hosts that batch updates.
impl Presenter for Vec<Notification> {
    fn show_face(&mut self, tile: TileId, symbol: SymbolId) {
        self.push(Notification::ShowFace { tile, symbol });
    }

    fn show_back(&mut self, tile: TileId) {
        self.push(Notification::ShowBack { tile });
    }

    fn announce_win(&mut self) {
        self.push(Notification::AnnounceWin);
    }
}
