//! Randomized properties of the match engine.

use pairs_engine::core::{GameConfig, SymbolId, TileId};
use pairs_engine::engine::{ClickOutcome, MatchEngine, Notification, TurnPhase};
use proptest::prelude::*;

/// A player action: click a tile, or let some time pass.
#[derive(Clone, Debug)]
enum Step {
    Click(u8),
    Wait(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0u8..18).prop_map(Step::Click),
        1 => (0u64..1200).prop_map(Step::Wait),
    ]
}

fn check_invariants(engine: &MatchEngine) {
    let board = engine.board();

    assert_eq!(board.tiles().len(), 16);
    assert!(board.pending().len() <= 2);
    assert_eq!(board.matched_count() % 2, 0);
    assert!(board.matched_count() <= 16);
    assert_eq!(
        board.matched_count(),
        board.tiles().iter().filter(|t| t.is_matched()).count()
    );
    for tile in board.tiles() {
        if tile.is_matched() {
            assert!(tile.is_revealed());
        }
    }
    for id in board.pending() {
        let tile = board.tile(*id).unwrap();
        assert!(tile.is_revealed() && !tile.is_matched());
    }
    if board.pending().len() == 2 {
        assert!(board.is_input_locked());
        assert_eq!(engine.phase(), TurnPhase::Resolving);
    }
}

proptest! {
    #[test]
    fn fresh_deal_pairs_every_symbol(seed in any::<u64>()) {
        let engine = MatchEngine::new(GameConfig::default(), seed).unwrap();
        let board = engine.board();

        let mut counts = [0usize; 8];
        for symbol in board.symbols() {
            counts[symbol.index()] += 1;
        }
        prop_assert_eq!(counts, [2; 8]);
        prop_assert_eq!(board.matched_count(), 0);
        prop_assert!(board.pending().is_empty());
        prop_assert!(!board.is_input_locked());
    }

    #[test]
    fn invariants_hold_under_random_play(
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 0..200),
    ) {
        let mut engine = MatchEngine::new(GameConfig::default(), seed).unwrap();
        let mut out: Vec<Notification> = Vec::new();

        for step in steps {
            match step {
                Step::Click(index) => {
                    let before = engine.board().clone();
                    let emitted = out.len();
                    let outcome = engine.handle_tile_click(TileId::new(index), &mut out);

                    if outcome.is_ignored() {
                        prop_assert_eq!(engine.board(), &before);
                        prop_assert_eq!(out.len(), emitted);
                    } else {
                        prop_assert_eq!(out.len(), emitted + 1);
                    }
                    if let ClickOutcome::Matched(_) = outcome {
                        prop_assert_eq!(engine.board().matched_count(), before.matched_count() + 2);
                        prop_assert!(!engine.board().is_input_locked());
                    }
                }
                Step::Wait(elapsed) => {
                    engine.advance(elapsed, &mut out);
                }
            }
            check_invariants(&engine);
        }

        engine.settle(&mut out);
        check_invariants(&engine);

        let wins = out.iter().filter(|n| **n == Notification::AnnounceWin).count();
        prop_assert_eq!(wins == 1, engine.board().matched_count() == 16);
        prop_assert!(wins <= 1);
    }

    #[test]
    fn perfect_play_always_wins(seed in any::<u64>()) {
        let mut engine = MatchEngine::new(GameConfig::default(), seed).unwrap();
        let mut out: Vec<Notification> = Vec::new();

        for symbol in SymbolId::all() {
            let positions = engine.board().positions_of(symbol);
            engine.handle_tile_click(positions[0], &mut out);
            let outcome = engine.handle_tile_click(positions[1], &mut out);
            prop_assert_eq!(outcome, ClickOutcome::Matched(symbol));
        }

        prop_assert_eq!(engine.phase(), TurnPhase::Won);
        prop_assert_eq!(engine.settle(&mut out), 1);
        prop_assert_eq!(out.last(), Some(&Notification::AnnounceWin));
    }
}
