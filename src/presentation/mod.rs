//! Pure mappings for the presentation layer.
//!
//! The engine only speaks in `TileId`s and `SymbolId`s. This module turns
//! those into things a renderer can use (asset keys, pixel positions)
//! without the engine ever learning about assets or pixels.
//!
//! - [`Visual`]: what a tile should look like
//! - [`TextureKeys`]: visual to asset key
//! - [`hover_visual`]: pointer-over feedback for face-down tiles
//! - [`GridLayout`]: tile centers, canvas size, pointer hit-testing

mod layout;
mod visual;

pub use layout::{GridLayout, DEFAULT_TILE_MARGIN, DEFAULT_TILE_SIZE};
pub use visual::{hover_visual, TextureKeys, Visual, BACK_HOVER_KEY, BACK_KEY};
