//! Game configuration.
//!
//! A `GameConfig` names the 8 symbols and fixes the two presentation
//! delays. Hosts either build one with the builder methods or deserialize
//! it (the `pairs` binary reads JSON):
//!
//! ```
//! use pairs_engine::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "mismatch_delay": 500 }"#).unwrap();
//! assert_eq!(config.mismatch_delay, 500);
//! assert_eq!(config.win_delay, 300);
//! assert!(config.validate().is_ok());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::tile::{SymbolId, SYMBOL_COUNT};

/// Delay before a mismatched pair flips back, in time units.
pub const DEFAULT_MISMATCH_DELAY: u64 = 900;

/// Delay between the final match and the win announcement, in time units.
pub const DEFAULT_WIN_DELAY: u64 = 300;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Labels of the symbols, indexed by `SymbolId`.
    ///
    /// The engine never interprets these; presentation uses them as
    /// asset keys.
    pub symbols: Vec<String>,

    /// Time a mismatched pair stays face-up before flipping back.
    pub mismatch_delay: u64,

    /// Time between the last match and the win announcement.
    pub win_delay: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: (1..=SYMBOL_COUNT).map(|i| format!("tile{i}")).collect(),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            win_delay: DEFAULT_WIN_DELAY,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol labels.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: u64) -> Self {
        self.mismatch_delay = delay;
        self
    }

    #[must_use]
    pub fn with_win_delay(mut self, delay: u64) -> Self {
        self.win_delay = delay;
        self
    }

    /// Label of a symbol, if it exists.
    #[must_use]
    pub fn symbol_label(&self, symbol: SymbolId) -> Option<&str> {
        self.symbols.get(symbol.index()).map(String::as_str)
    }

    /// Check the symbol set: exactly 8 distinct labels.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.symbols.len() != SYMBOL_COUNT {
            return Err(SetupError::SymbolCount {
                expected: SYMBOL_COUNT,
                found: self.symbols.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for label in &self.symbols {
            if !seen.insert(label.as_str()) {
                return Err(SetupError::DuplicateSymbol(label.clone()));
            }
        }

        Ok(())
    }
}
