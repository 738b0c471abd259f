//! Property tests for the global engine invariants.
//!
//! Whatever the pointer does, the 52 identities stay partitioned across
//! the slots, one slot each, and every deal is reproducible from its
//! seed.

use proptest::prelude::*;

use rust_patience::{CardId, Game, Point};

/// One abstract pointer interaction.
#[derive(Clone, Debug)]
enum PointerOp {
    Click(Point),
    DoubleClick(Point),
    Drag { from: Point, to: Point },
}

fn point_strategy() -> impl Strategy<Value = Point> {
    // Covers the whole board plus a margin of dead space.
    (0.0f32..900.0, 0.0f32..700.0).prop_map(|(x, y)| Point::new(x, y))
}

fn op_strategy() -> impl Strategy<Value = PointerOp> {
    prop_oneof![
        point_strategy().prop_map(PointerOp::Click),
        point_strategy().prop_map(PointerOp::DoubleClick),
        (point_strategy(), point_strategy())
            .prop_map(|(from, to)| PointerOp::Drag { from, to }),
    ]
}

fn snapshot(game: &Game) -> Vec<Vec<CardId>> {
    game.table()
        .slots()
        .iter()
        .map(|slot| slot.cards().to_vec())
        .collect()
}

proptest! {
    /// Random interaction sequences never break card conservation.
    #[test]
    fn card_conservation_under_random_play(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut game = Game::yukon().unwrap();
        game.new_game(Some(seed)).unwrap();

        for op in ops {
            match op {
                PointerOp::Click(pos) => {
                    game.click(pos).unwrap();
                }
                PointerOp::DoubleClick(pos) => {
                    game.double_click(pos).unwrap();
                }
                PointerOp::Drag { from, to } => {
                    if game.start_drag(from).is_some() {
                        let _ = game.update_drag(to);
                        game.end_drag(to).unwrap();
                    }
                }
            }
            prop_assert!(game.table().check_invariants().is_ok());
        }
    }

    /// Preview during a drag never mutates the table.
    #[test]
    fn preview_is_pure(
        seed in any::<u64>(),
        from in point_strategy(),
        probes in prop::collection::vec(point_strategy(), 1..10),
    ) {
        let mut game = Game::yukon().unwrap();
        game.new_game(Some(seed)).unwrap();

        if game.start_drag(from).is_some() {
            let before = snapshot(&game);
            for probe in probes {
                let first = game.update_drag(probe);
                prop_assert_eq!(game.update_drag(probe), first);
            }
            prop_assert_eq!(snapshot(&game), before);
            game.cancel_drag();
        }
    }

    /// Equal seeds always deal equal layouts.
    #[test]
    fn deal_is_deterministic(seed in any::<u64>()) {
        let mut game1 = Game::yukon().unwrap();
        let mut game2 = Game::yukon().unwrap();
        game1.new_game(Some(seed)).unwrap();
        game2.new_game(Some(seed)).unwrap();

        prop_assert_eq!(snapshot(&game1), snapshot(&game2));
    }

    /// Klondike's stock cycle conserves cards too.
    #[test]
    fn klondike_stock_cycle_conserves(clicks in 1usize..60) {
        let mut game = Game::klondike().unwrap();
        game.new_game(Some(42)).unwrap();

        for _ in 0..clicks {
            game.click(Point::new(50.0, 50.0)).unwrap();
            prop_assert!(game.table().check_invariants().is_ok());
        }
    }
}
