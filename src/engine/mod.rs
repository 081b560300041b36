//! The match engine: the only mutator of the board.
//!
//! ## Turn cycle
//!
//! ```text
//! Idle --click--> OneRevealed --click--> Resolving
//!   ^                                      |  |
//!   |------------ match (immediate) -------|  |
//!   |------------ mismatch (after delay) -----|
//! ```
//!
//! `Idle` with all 16 tiles matched is `Won`.
//!
//! The engine talks to the presentation layer through the [`Presenter`]
//! trait and defers work on a virtual clock (see [`crate::schedule`]).
//!
//! ```
//! use pairs_engine::core::{Board, GameConfig, SymbolId, TileId};
//! use pairs_engine::engine::{ClickOutcome, MatchEngine, Notification};
//!
//! let layout: Vec<_> = SymbolId::all().flat_map(|s| [s, s]).collect();
//! let board = Board::from_symbols(&layout).unwrap();
//! let mut engine = MatchEngine::with_board(GameConfig::default(), board, 0).unwrap();
//!
//! let mut shown: Vec<Notification> = Vec::new();
//! engine.handle_tile_click(TileId::new(0), &mut shown);
//! let outcome = engine.handle_tile_click(TileId::new(1), &mut shown);
//!
//! assert_eq!(outcome, ClickOutcome::Matched(SymbolId::new(0)));
//! assert_eq!(engine.board().matched_count(), 2);
//! assert!(matches!(shown[1], Notification::ShowFace { .. }));
//! ```

mod match_engine;
mod presenter;

pub use match_engine::{ClickOutcome, EngineSnapshot, IgnoreReason, MatchEngine, TurnPhase};
pub use presenter::{Notification, Presenter};
