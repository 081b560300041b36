//! Terminal host for a pairs session.
//!
//! ```text
//! pairs [config.json] [--seed N]
//! ```
//!
//! Enter `row col` (0-based) to reveal a tile, `r` to restart, `q` to quit.
//! Set `RUST_LOG=debug` to trace engine decisions.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use log::info;
use pairs_engine::core::{GRID_COLS, GRID_ROWS};
use pairs_engine::{ClickOutcome, GameConfig, MatchEngine, Presenter, SymbolId, TileId};

/// Prints engine notifications as they arrive.
struct TerminalPresenter<'a> {
    config: &'a GameConfig,
    won: bool,
}

impl Presenter for TerminalPresenter<'_> {
    fn show_face(&mut self, tile: TileId, symbol: SymbolId) {
        let label = self.config.symbol_label(symbol).unwrap_or("?");
        println!("  ({}, {}) is {label}", tile.row(), tile.col());
    }

    fn show_back(&mut self, tile: TileId) {
        println!("  ({}, {}) flips back", tile.row(), tile.col());
    }

    fn announce_win(&mut self) {
        self.won = true;
        println!("You win!");
    }
}

#[derive(Debug, Parser)]
#[command(name = "pairs", about = "Play a game of pairs in the terminal")]
struct Args {
    /// JSON game configuration (symbol labels, delays)
    config: Option<PathBuf>,

    /// Seed for the deal (default: current time)
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

fn render(engine: &MatchEngine) -> String {
    let mut out = String::new();
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let cell = engine
                .board()
                .tile(TileId::at(row, col))
                .filter(|tile| tile.is_revealed())
                .map(|tile| format!("{:>3}", tile.symbol().index() + 1))
                .unwrap_or_else(|| "  #".to_string());
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn parse_tile(line: &str) -> Option<TileId> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    (row < GRID_ROWS && col < GRID_COLS).then(|| TileId::at(row, col))
}

/// Sleep through every pending delay, then run the due steps.
fn wait_out(engine: &mut MatchEngine, presenter: &mut TerminalPresenter<'_>) {
    while let Some(wait) = engine.time_until_next() {
        std::thread::sleep(Duration::from_millis(wait));
        engine.advance(wait, presenter);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };
    let mut engine = MatchEngine::new(config.clone(), seed).context("invalid game configuration")?;
    let mut presenter = TerminalPresenter { config: &config, won: false };

    let stdin = io::stdin();
    print!("{}> ", render(&engine));
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" => break,
            "r" => {
                engine.initialize();
                presenter.won = false;
            }
            input => match parse_tile(input) {
                Some(tile) => {
                    if let ClickOutcome::Ignored(reason) = engine.handle_tile_click(tile, &mut presenter) {
                        println!("  ignored: {reason:?}");
                    }
                    wait_out(&mut engine, &mut presenter);
                }
                None => println!("  enter `row col`, `r` or `q`"),
            },
        }

        if presenter.won {
            println!("Enter `r` to play again or `q` to quit.");
        }
        print!("{}> ", render(&engine));
        io::stdout().flush()?;
    }

    Ok(())
}
