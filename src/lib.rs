//! # pairs-engine
//!
//! A headless engine for the memory-matching game "pairs": 16 face-down
//! tiles, 8 symbols dealt twice, two reveals per turn.
//!
//! ## Design Principles
//!
//! 1. **Single Mutator**: `MatchEngine` owns the `Board`; hosts read it and
//!    forward clicks, never write it.
//!
//! 2. **Virtual Time**: Delays (flip-back, win announcement) run on a
//!    `Timeline` the host advances, so sessions are testable without a clock.
//!
//! 3. **Presentation at Arm's Length**: The engine emits `Presenter` calls
//!    with tile and symbol IDs only. Asset keys and pixels live in
//!    `presentation`.
//!
//! ## Modules
//!
//! - `core`: Tiles, symbols, board, configuration, RNG, setup errors
//! - `schedule`: Virtual-clock task queue
//! - `engine`: Match engine, presenter seam, click outcomes
//! - `presentation`: Visual tokens, texture keys, hover, grid layout

pub mod core;
pub mod schedule;
pub mod engine;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{
    Board, GameConfig, GameRng, GameRngState, SetupError, SymbolId, Tile, TileId,
};

pub use crate::schedule::Timeline;

pub use crate::engine::{
    ClickOutcome, EngineSnapshot, IgnoreReason, MatchEngine, Notification, Presenter, TurnPhase,
};

pub use crate::presentation::{hover_visual, GridLayout, TextureKeys, Visual};
