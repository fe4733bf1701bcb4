use crate::domain::board::{Board, CardLocation, Column, ColumnId, DropTarget};
use crate::domain::card::CardId;
use crate::error::{DndError, Result};
use serde::{Deserialize, Serialize};

/// A structural change to card order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Move {
    /// Move the card at `from` to `to` within one column
    Reorder {
        column: ColumnId,
        from: usize,
        to: usize,
    },
    /// Move a card out of `from_column` into `to_column` at `index`
    /// (clamped to the column length)
    Transfer {
        card: CardId,
        from_column: ColumnId,
        to_column: ColumnId,
        index: usize,
    },
}

/// Where a moved card came from and where it ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub card: CardId,
    pub from: CardLocation,
    pub to: CardLocation,
}

impl MoveOutcome {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Removes the card at `from` and re-inserts it at `to`
///
/// Only the cards between the two indices shift, each by one place.
/// `from == to` leaves the column untouched.
pub fn reorder_within(column: &mut Column, from: usize, to: usize) -> Result<()> {
    let len = column.len();
    if from >= len {
        return Err(DndError::IndexOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(DndError::IndexOutOfRange { index: to, len });
    }
    if from == to {
        return Ok(());
    }

    let card = column.items.remove(from);
    column.items.insert(to, card);
    Ok(())
}

/// Moves `card` from wherever it sits into `to_column` at `index`
///
/// `index` is clamped to `[0, len]` of the destination after the card has
/// been taken out of its source column.
pub fn transfer(
    board: &mut Board,
    card: &CardId,
    to_column: &ColumnId,
    index: usize,
) -> Result<MoveOutcome> {
    let from = board
        .locate_card(card)
        .ok_or_else(|| DndError::UnknownCard(card.to_string()))?;
    let dest = board
        .column_index(to_column)
        .ok_or_else(|| DndError::UnknownColumn(to_column.to_string()))?;

    let item = board.columns[from.column_index].items.remove(from.index);
    let dest_items = &mut board.columns[dest].items;
    let index = index.min(dest_items.len());
    dest_items.insert(index, item);

    Ok(MoveOutcome {
        card: card.clone(),
        from,
        to: CardLocation {
            column_index: dest,
            index,
        },
    })
}

/// Index the active card should take when dropped on `target`
///
/// A card dropped on another card lands *after* it if it came from a lower
/// index, and *before* it otherwise. Within one column this is plain
/// array-move semantics: dragging `A` onto `C` in `[A, B, C]` gives
/// `[B, C, A]`. Across columns the indices of the two cards in their own
/// columns are compared. Dropping on a column rather than a card appends.
///
/// For a target in the active card's own column this is the final index for
/// [`reorder_within`]; otherwise it is the insert index for [`transfer`].
/// Returns `None` when `target` points at a column or card position the board
/// no longer has.
pub fn drop_index(board: &Board, active: CardLocation, target: &DropTarget) -> Option<usize> {
    match target {
        DropTarget::Column { column_index, .. } => {
            let len = board.columns.get(*column_index)?.len();
            if *column_index == active.column_index {
                Some(len.saturating_sub(1))
            } else {
                Some(len)
            }
        }
        DropTarget::Card { location, .. } => {
            let column = board.columns.get(location.column_index)?;
            if location.index >= column.len() {
                return None;
            }
            if location.column_index == active.column_index || active.index >= location.index {
                Some(location.index)
            } else {
                Some(location.index + 1)
            }
        }
    }
}

/// Applies a move in place; on error the board is unchanged
pub fn apply_move(board: &mut Board, mv: &Move) -> Result<MoveOutcome> {
    match mv {
        Move::Reorder { column, from, to } => {
            let column_index = board
                .column_index(column)
                .ok_or_else(|| DndError::UnknownColumn(column.to_string()))?;
            let col = &mut board.columns[column_index];
            let card = col
                .items
                .get(*from)
                .map(|c| c.id.clone())
                .ok_or(DndError::IndexOutOfRange {
                    index: *from,
                    len: col.len(),
                })?;
            reorder_within(col, *from, *to)?;

            Ok(MoveOutcome {
                card,
                from: CardLocation {
                    column_index,
                    index: *from,
                },
                to: CardLocation {
                    column_index,
                    index: *to,
                },
            })
        }
        Move::Transfer {
            card,
            from_column,
            to_column,
            index,
        } => {
            let source = board
                .column_index(from_column)
                .ok_or_else(|| DndError::UnknownColumn(from_column.to_string()))?;
            let loc = board
                .locate_card(card)
                .ok_or_else(|| DndError::UnknownCard(card.to_string()))?;
            if loc.column_index != source {
                return Err(DndError::UnknownCard(card.to_string()));
            }
            transfer(board, card, to_column, *index)
        }
    }
}

/// Returns a new board with the move applied, leaving `board` untouched
pub fn apply_move_to_snapshot(board: &Board, mv: &Move) -> Result<(Board, MoveOutcome)> {
    let mut next = board.clone();
    let outcome = apply_move(&mut next, mv)?;
    Ok((next, outcome))
}
