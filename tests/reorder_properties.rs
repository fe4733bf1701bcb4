use hlavi_dnd::domain::reorder::{apply_move, reorder_within};
use hlavi_dnd::{Board, BoardEngine, CardId, DragController, EngineConfig, Move, SequentialIdGenerator};
use proptest::prelude::*;
use std::collections::HashSet;

/// Builds a board from per-column card counts
fn build_board(sizes: &[usize]) -> BoardEngine {
    let mut config = EngineConfig::default();
    config.board.columns = (0..sizes.len()).map(|i| format!("Column {}", i)).collect();
    let mut engine =
        BoardEngine::with_id_generator(&config, Box::new(SequentialIdGenerator::new()));

    let columns: Vec<_> = engine.board().columns.iter().map(|c| c.id.clone()).collect();
    for (column, size) in columns.iter().zip(sizes) {
        for n in 0..*size {
            engine.add_card(column, format!("Card {}", n)).unwrap();
        }
    }
    engine
}

fn sorted_ids(board: &Board) -> Vec<CardId> {
    let mut ids = board.card_ids();
    ids.sort();
    ids
}

fn assert_single_ownership(board: &Board) {
    let mut seen = HashSet::new();
    for card in board.columns.iter().flat_map(|c| c.items.iter()) {
        assert!(seen.insert(card.id.clone()), "card {} owned twice", card.id);
    }
    assert!(board.validate().is_ok());
}

/// Raw move picks, interpreted modulo the current board shape
#[derive(Debug, Clone)]
enum Pick {
    Reorder(usize, usize, usize),
    Transfer(usize, usize, usize),
    Drag(usize, usize, bool),
}

fn pick() -> impl Strategy<Value = Pick> {
    prop_oneof![
        (any::<usize>(), any::<usize>(), any::<usize>()).prop_map(|(c, f, t)| Pick::Reorder(c, f, t)),
        (any::<usize>(), any::<usize>(), 0usize..8).prop_map(|(c, d, i)| Pick::Transfer(c, d, i)),
        (any::<usize>(), any::<usize>(), any::<bool>()).prop_map(|(c, o, e)| Pick::Drag(c, o, e)),
    ]
}

fn apply_pick(board: &mut Board, controller: &mut DragController, pick: &Pick) {
    let ids = board.card_ids();
    let columns: Vec<_> = board.columns.iter().map(|c| c.id.clone()).collect();

    match *pick {
        Pick::Reorder(c, from, to) => {
            let column = &board.columns[c % columns.len()];
            if column.is_empty() {
                return;
            }
            let mv = Move::Reorder {
                column: column.id.clone(),
                from: from % column.len(),
                to: to % column.len(),
            };
            apply_move(board, &mv).unwrap();
        }
        Pick::Transfer(c, d, index) => {
            if ids.is_empty() {
                return;
            }
            let card = ids[c % ids.len()].clone();
            let Some(loc) = board.locate_card(&card) else {
                return;
            };
            let mv = Move::Transfer {
                from_column: columns[loc.column_index].clone(),
                card,
                to_column: columns[d % columns.len()].clone(),
                index,
            };
            apply_move(board, &mv).unwrap();
        }
        Pick::Drag(c, o, over_column) => {
            if ids.is_empty() {
                return;
            }
            let active = ids[c % ids.len()].clone();
            let over = if over_column {
                columns[o % columns.len()].to_string()
            } else {
                ids[o % ids.len()].to_string()
            };
            controller.begin_drag(board, &active).unwrap();
            controller.update_over(board, Some(over.as_str())).unwrap();
            controller
                .end_drag(board, &active, Some(over.as_str()))
                .unwrap();
        }
    }
}

proptest! {
    /// Property: every sequence of moves keeps each card exactly once
    #[test]
    fn prop_moves_conserve_cards(
        sizes in prop::collection::vec(0usize..5, 1..5),
        picks in prop::collection::vec(pick(), 0..30),
    ) {
        let mut board = build_board(&sizes).board().clone();
        let mut controller = DragController::default();
        let initial = sorted_ids(&board);

        for pick in &picks {
            apply_pick(&mut board, &mut controller, pick);
            assert_single_ownership(&board);
        }

        prop_assert_eq!(board.card_count(), initial.len());
        prop_assert_eq!(sorted_ids(&board), initial);
    }

    /// Property: moving a card to its own index changes nothing
    #[test]
    fn prop_null_reorder_is_identity(size in 1usize..8, index in any::<usize>()) {
        let engine = build_board(&[size]);
        let mut column = engine.board().columns[0].clone();
        let before = column.clone();
        let index = index % size;

        reorder_within(&mut column, index, index).unwrap();

        prop_assert_eq!(column, before);
    }

    /// Property: a reorder only shifts cards between the two indices
    #[test]
    fn prop_reorder_touches_only_range(size in 1usize..10, from in any::<usize>(), to in any::<usize>()) {
        let engine = build_board(&[size]);
        let mut column = engine.board().columns[0].clone();
        let before = column.card_ids();
        let (from, to) = (from % size, to % size);

        reorder_within(&mut column, from, to).unwrap();
        let after = column.card_ids();

        let (lo, hi) = (from.min(to), from.max(to));
        for i in (0..lo).chain(hi + 1..size) {
            prop_assert_eq!(&after[i], &before[i]);
        }
        prop_assert_eq!(&after[to], &before[from]);
    }

    /// Property: a second begin_drag never replaces the active item
    #[test]
    fn prop_drag_is_modal(size in 2usize..6, first in any::<usize>(), second in any::<usize>()) {
        let mut engine = build_board(&[size]);
        let ids = engine.board().card_ids();
        let first = ids[first % size].clone();
        let second = ids[second % size].clone();

        engine.begin_drag(&first).unwrap();
        prop_assert!(engine.begin_drag(&second).is_err());
        prop_assert_eq!(&engine.session().unwrap().active_item, &first);
    }
}
