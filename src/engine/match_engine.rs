//! Match engine implementation.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Board, GameConfig, GameRng, GameRngState, SetupError, SymbolId, TileId};
use crate::schedule::Timeline;

use super::presenter::Presenter;

/// Where the current session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No tiles pending.
    Idle,
    /// First tile of a pair is face-up.
    OneRevealed,
    /// Two tiles face-up, input locked until the pair resolves.
    Resolving,
    /// Every tile matched. Terminal.
    Won,
}

/// Why a click was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A mismatched pair is still waiting to flip back.
    InputLocked,
    /// The tile is already face-up awaiting comparison.
    AlreadyRevealed,
    AlreadyMatched,
    /// The ID does not name a tile on this board.
    UnknownTile,
}

/// Result of a tile click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Nothing changed and nothing was presented.
    Ignored(IgnoreReason),
    /// First tile of a pair turned face-up.
    Revealed,
    /// Second tile completed a pair. Input is unlocked again.
    Matched(SymbolId),
    /// Second tile did not match. Both flip back after the mismatch delay.
    Mismatched,
}

impl ClickOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ClickOutcome::Ignored(_))
    }
}

/// Work deferred on the session timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineTask {
    /// Flip a mismatched pair face-down and unlock input.
    ConcealPair(TileId, TileId),
    AnnounceWin,
}

/// Serializable capture of an engine between clicks.
///
/// Restoring a snapshot resumes the same session and deals the same
/// future sessions as the original engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub board: Board,
    pub rng: GameRngState,
    pub session: u32,
    pub win_announced: bool,
}

/// Owns the board and decides every state transition.
///
/// ## Usage
///
/// - `handle_tile_click()`: Forward each pointer-down on a tile
/// - `advance()`: Forward elapsed time so deferred steps can run
/// - `initialize()`: Start a new session with a fresh deal
///
/// Invalid clicks are silently dropped (reported as `ClickOutcome::Ignored`).
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    timeline: Timeline<EngineTask>,
    session: u32,
    win_announced: bool,
}

impl MatchEngine {
    /// Create an engine and deal the first session.
    ///
    /// Fails if the configuration does not name exactly 8 distinct symbols.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SetupError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let board = Board::shuffled(&mut rng.fork());
        Ok(Self::start(config, rng, board, 1, false))
    }

    /// Create an engine whose first session uses a fixed board.
    ///
    /// Later calls to `initialize()` deal shuffled boards from `seed`.
    /// A board caught mid-turn resumes: an unresolved mismatch flips back
    /// after the mismatch delay, a completed board announces its win.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self, SetupError> {
        config.validate()?;
        Ok(Self::start(config, GameRng::new(seed), board, 1, false))
    }

    /// Capture the board, RNG and session counters.
    ///
    /// Pending deferred steps are not captured; `restore` reschedules them
    /// from the board with their full delay.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            rng: self.rng.state(),
            session: self.session,
            win_announced: self.win_announced,
        }
    }

    /// Resume an engine from a snapshot.
    pub fn restore(config: GameConfig, snapshot: EngineSnapshot) -> Result<Self, SetupError> {
        config.validate()?;
        let rng = GameRng::from_state(&snapshot.rng);
        Ok(Self::start(config, rng, snapshot.board, snapshot.session, snapshot.win_announced))
    }

    fn start(config: GameConfig, rng: GameRng, board: Board, session: u32, win_announced: bool) -> Self {
        info!("session {session} started");
        let mut engine = Self {
            config,
            rng,
            board,
            timeline: Timeline::new(),
            session,
            win_announced,
        };
        engine.resume_deferred();
        engine
    }

    /// Reschedule whatever the board is waiting on.
    fn resume_deferred(&mut self) {
        if let [first, second] = *self.board.pending() {
            self.timeline
                .schedule(self.config.mismatch_delay, EngineTask::ConcealPair(first, second));
        }
        if self.board.is_complete() && !self.win_announced {
            self.timeline.schedule(self.config.win_delay, EngineTask::AnnounceWin);
        }
    }

    /// Start a new session: fresh shuffled board, empty timeline.
    ///
    /// The previous board is discarded along with any deferred steps that
    /// had not fired yet.
    pub fn initialize(&mut self) {
        self.board = Board::shuffled(&mut self.rng.fork());
        self.timeline = Timeline::new();
        self.session += 1;
        self.win_announced = false;
        info!("session {} started", self.session);
    }

    /// Handle a player click on `tile`.
    pub fn handle_tile_click<P>(&mut self, tile: TileId, presenter: &mut P) -> ClickOutcome
    where
        P: Presenter + ?Sized,
    {
        if let Err(reason) = self.check_clickable(tile) {
            debug!("ignored click on {tile}: {reason:?}");
            return ClickOutcome::Ignored(reason);
        }

        let revealed = self.board.tile_mut(tile);
        revealed.reveal();
        let symbol = revealed.symbol();
        presenter.show_face(tile, symbol);
        debug!("revealed {tile} ({symbol})");

        if self.board.push_pending(tile) < 2 {
            return ClickOutcome::Revealed;
        }

        self.board.set_input_locked(true);
        let (first, second) = (self.board.pending()[0], self.board.pending()[1]);
        self.resolve_pair(first, second)
    }

    fn check_clickable(&self, tile: TileId) -> Result<(), IgnoreReason> {
        if self.board.is_input_locked() {
            return Err(IgnoreReason::InputLocked);
        }
        let tile = self.board.tile(tile).ok_or(IgnoreReason::UnknownTile)?;
        if tile.is_matched() {
            return Err(IgnoreReason::AlreadyMatched);
        }
        if tile.is_revealed() {
            return Err(IgnoreReason::AlreadyRevealed);
        }
        Ok(())
    }

    fn resolve_pair(&mut self, first: TileId, second: TileId) -> ClickOutcome {
        let symbol = self.board.symbol_at(first);

        if symbol != self.board.symbol_at(second) {
            debug!("{first} and {second} differ, flipping back in {}", self.config.mismatch_delay);
            self.timeline
                .schedule(self.config.mismatch_delay, EngineTask::ConcealPair(first, second));
            return ClickOutcome::Mismatched;
        }

        self.board.tile_mut(first).mark_matched();
        self.board.tile_mut(second).mark_matched();
        self.board.record_match();
        self.board.clear_pending();
        self.board.set_input_locked(false);
        info!("matched {symbol} ({}/16)", self.board.matched_count());

        if self.board.is_complete() {
            self.timeline.schedule(self.config.win_delay, EngineTask::AnnounceWin);
        }

        ClickOutcome::Matched(symbol)
    }

    /// Move virtual time forward and run every step that came due.
    ///
    /// Returns the number of steps run.
    pub fn advance<P>(&mut self, elapsed: u64, presenter: &mut P) -> usize
    where
        P: Presenter + ?Sized,
    {
        let due = self.timeline.advance(elapsed);
        let count = due.len();
        for task in due {
            self.run_task(task, presenter);
        }
        count
    }

    /// Advance until nothing is pending.
    ///
    /// Returns the number of steps run.
    pub fn settle<P>(&mut self, presenter: &mut P) -> usize
    where
        P: Presenter + ?Sized,
    {
        let mut count = 0;
        while let Some(wait) = self.timeline.time_until_next() {
            count += self.advance(wait, presenter);
        }
        count
    }

    fn run_task<P>(&mut self, task: EngineTask, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        match task {
            EngineTask::ConcealPair(first, second) => {
                for tile in [first, second] {
                    self.board.tile_mut(tile).conceal();
                    presenter.show_back(tile);
                }
                self.board.clear_pending();
                self.board.set_input_locked(false);
                debug!("{first} and {second} flipped back");
            }
            EngineTask::AnnounceWin => {
                self.win_announced = true;
                presenter.announce_win();
                info!("session {} won", self.session);
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.board.is_complete() {
            return TurnPhase::Won;
        }
        match self.board.pending().len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneRevealed,
            _ => TurnPhase::Resolving,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current virtual time within this session.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    /// When the next deferred step is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_deadline()
    }

    /// Time until the next deferred step is due, if any.
    #[must_use]
    pub fn time_until_next(&self) -> Option<u64> {
        self.timeline.time_until_next()
    }

    /// Session number, starting at 1.
    #[must_use]
    pub fn session(&self) -> u32 {
        self.session
    }

    #[must_use]
    pub fn is_win_announced(&self) -> bool {
        self.win_announced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Notification;

    fn sorted_engine() -> MatchEngine {
        let layout: Vec<_> = SymbolId::all().flat_map(|s| [s, s]).collect();
        let board = Board::from_symbols(&layout).unwrap();
        MatchEngine::with_board(GameConfig::default(), board, 0).unwrap()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = MatchEngine::new(GameConfig::default(), 42).unwrap();

        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert_eq!(engine.session(), 1);
        assert_eq!(engine.board().matched_count(), 0);
        assert!(engine.next_deadline().is_none());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::new().with_symbols(["only", "three", "symbols"]);
        let err = MatchEngine::new(config, 1).unwrap_err();

        assert_eq!(err, SetupError::SymbolCount { expected: 8, found: 3 });
    }

    #[test]
    fn test_first_click_reveals() {
        let mut engine = sorted_engine();
        let mut out: Vec<Notification> = Vec::new();

        let outcome = engine.handle_tile_click(TileId::new(0), &mut out);

        assert_eq!(outcome, ClickOutcome::Revealed);
        assert_eq!(engine.phase(), TurnPhase::OneRevealed);
        assert!(!engine.board().is_input_locked());
        assert_eq!(out, vec![Notification::ShowFace { tile: TileId::new(0), symbol: SymbolId::new(0) }]);
    }

    #[test]
    fn test_ignore_reasons() {
        let mut engine = sorted_engine();
        let mut out: Vec<Notification> = Vec::new();

        engine.handle_tile_click(TileId::new(0), &mut out);
        assert_eq!(
            engine.handle_tile_click(TileId::new(0), &mut out),
            ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed)
        );
        assert_eq!(
            engine.handle_tile_click(TileId::new(16), &mut out),
            ClickOutcome::Ignored(IgnoreReason::UnknownTile)
        );

        engine.handle_tile_click(TileId::new(1), &mut out);
        assert_eq!(
            engine.handle_tile_click(TileId::new(1), &mut out),
            ClickOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );

        engine.handle_tile_click(TileId::new(2), &mut out);
        engine.handle_tile_click(TileId::new(4), &mut out);
        assert_eq!(
            engine.handle_tile_click(TileId::new(5), &mut out),
            ClickOutcome::Ignored(IgnoreReason::InputLocked)
        );
    }

    #[test]
    fn test_mismatch_locks_until_delay() {
        let mut engine = sorted_engine();
        let mut out: Vec<Notification> = Vec::new();

        engine.handle_tile_click(TileId::new(0), &mut out);
        let outcome = engine.handle_tile_click(TileId::new(2), &mut out);

        assert_eq!(outcome, ClickOutcome::Mismatched);
        assert_eq!(engine.phase(), TurnPhase::Resolving);
        assert!(engine.board().is_input_locked());
        assert_eq!(engine.next_deadline(), Some(900));

        assert_eq!(engine.advance(899, &mut out), 0);
        assert!(engine.board().is_input_locked());

        assert_eq!(engine.advance(1, &mut out), 1);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert!(!engine.board().is_input_locked());
        assert_eq!(
            &out[2..],
            &[
                Notification::ShowBack { tile: TileId::new(0) },
                Notification::ShowBack { tile: TileId::new(2) },
            ]
        );
    }

    #[test]
    fn test_initialize_drops_pending_steps() {
        let mut engine = sorted_engine();
        let mut out: Vec<Notification> = Vec::new();

        engine.handle_tile_click(TileId::new(0), &mut out);
        engine.handle_tile_click(TileId::new(2), &mut out);
        engine.initialize();
        out.clear();

        assert_eq!(engine.session(), 2);
        assert_eq!(engine.phase(), TurnPhase::Idle);
        assert_eq!(engine.settle(&mut out), 0);
        assert!(out.is_empty());
        assert_eq!(engine.board().face_down_count(), 16);
    }

    #[test]
    fn test_sessions_deal_different_boards() {
        let mut engine = MatchEngine::new(GameConfig::default(), 5).unwrap();
        let first = engine.board().clone();

        engine.initialize();

        assert_ne!(&first, engine.board());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = MatchEngine::new(GameConfig::default(), 77).unwrap();
        let b = MatchEngine::new(GameConfig::default(), 77).unwrap();

        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_dyn_presenter() {
        let mut engine = sorted_engine();
        let mut out: Vec<Notification> = Vec::new();
        let presenter: &mut dyn Presenter = &mut out;

        engine.handle_tile_click(TileId::new(3), presenter);

        assert_eq!(out.len(), 1);
    }
}
