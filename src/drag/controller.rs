use crate::config::CancelPolicy;
use crate::domain::board::{Board, CardLocation, ColumnId};
use crate::domain::card::CardId;
use crate::domain::reorder::{self, MoveOutcome};
use crate::drag::session::{DragSession, DragState};
use crate::error::{DndError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of processing a drag-over event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverOutcome {
    /// Pointer left every target
    Cleared,
    /// Target is in the card's current column; nothing moved yet
    SameColumn,
    /// Card was moved into the hovered column as a live preview
    Previewed(MoveOutcome),
}

/// Final placement of a dropped card relative to where it was picked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropOutcome {
    pub card: CardId,
    pub from_column: ColumnId,
    pub from_index: usize,
    pub to_column: ColumnId,
    pub to_index: usize,
}

impl DropOutcome {
    /// True when the card ended where it started
    pub fn is_noop(&self) -> bool {
        self.from_column == self.to_column && self.from_index == self.to_index
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    cancel_policy: CancelPolicy,
}

impl DragController {
    pub fn new(cancel_policy: CancelPolicy) -> Self {
        Self {
            state: DragState::Idle,
            cancel_policy,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn cancel_policy(&self) -> CancelPolicy {
        self.cancel_policy
    }

    pub fn set_cancel_policy(&mut self, policy: CancelPolicy) {
        self.cancel_policy = policy;
    }

    /// Starts a drag of `item`, recording where it was picked up
    ///
    /// Rejected without touching the live session if a drag is already active.
    pub fn begin_drag(&mut self, board: &Board, item: &CardId) -> Result<()> {
        if let Some(active) = self.state.session() {
            debug!(active = %active.active_item, rejected = %item, "drag already active");
            return Err(DndError::AlreadyDragging);
        }

        let loc = board
            .locate_card(item)
            .ok_or_else(|| DndError::UnknownCard(item.to_string()))?;
        let origin_column = board.columns[loc.column_index].id.clone();

        debug!(card = %item, column = %origin_column, index = loc.index, "drag started");
        self.state = DragState::Dragging(DragSession::new(item.clone(), origin_column, loc.index));
        Ok(())
    }

    /// Tracks the hovered target and previews cross-column moves
    ///
    /// Hovering a card or column in a different column moves the active card
    /// there straight away. Order within one column is only settled on drop.
    pub fn update_over(&mut self, board: &mut Board, over: Option<&str>) -> Result<OverOutcome> {
        let session = match &mut self.state {
            DragState::Dragging(session) => session,
            DragState::Idle => return Err(DndError::NotDragging),
        };

        let Some(over) = over else {
            session.over_target = None;
            return Ok(OverOutcome::Cleared);
        };

        let active = board
            .locate_card(&session.active_item)
            .ok_or_else(|| DndError::UnresolvedTarget(session.active_item.to_string()))?;
        let target = board
            .resolve_target(over)
            .ok_or_else(|| DndError::UnresolvedTarget(over.to_string()))?;

        session.over_target = Some(over.to_string());

        if target.column_index() == active.column_index {
            return Ok(OverOutcome::SameColumn);
        }

        let index = reorder::drop_index(board, active, &target)
            .ok_or_else(|| DndError::UnresolvedTarget(over.to_string()))?;
        let to_column = board.columns[target.column_index()].id.clone();
        let outcome = reorder::transfer(board, &session.active_item, &to_column, index)?;

        debug!(
            card = %outcome.card,
            column = %to_column,
            index = outcome.to.index,
            "previewed cross-column move"
        );
        Ok(OverOutcome::Previewed(outcome))
    }

    /// Drops the active card on `over` and ends the session
    ///
    /// The session ends whether or not the drop resolves. When it does not,
    /// the board keeps whatever the last preview left it as.
    pub fn end_drag(
        &mut self,
        board: &mut Board,
        active: &CardId,
        over: Option<&str>,
    ) -> Result<DropOutcome> {
        let session = self.state.take().ok_or(DndError::NotDragging)?;
        if &session.active_item != active {
            return Err(DndError::UnresolvedTarget(active.to_string()));
        }

        let over = over.ok_or(DndError::NoDropTarget)?;
        let loc = board
            .locate_card(active)
            .ok_or_else(|| DndError::UnresolvedTarget(active.to_string()))?;
        let target = board
            .resolve_target(over)
            .ok_or_else(|| DndError::UnresolvedTarget(over.to_string()))?;

        let index = reorder::drop_index(board, loc, &target)
            .ok_or_else(|| DndError::UnresolvedTarget(over.to_string()))?;
        let final_loc = if target.column_index() == loc.column_index {
            reorder::reorder_within(&mut board.columns[loc.column_index], loc.index, index)?;
            CardLocation {
                column_index: loc.column_index,
                index,
            }
        } else {
            let to_column = board.columns[target.column_index()].id.clone();
            reorder::transfer(board, active, &to_column, index)?.to
        };

        let outcome = DropOutcome {
            card: active.clone(),
            from_column: session.origin_column,
            from_index: session.origin_index,
            to_column: board.columns[final_loc.column_index].id.clone(),
            to_index: final_loc.index,
        };
        debug!(
            card = %outcome.card,
            column = %outcome.to_column,
            index = outcome.to_index,
            "drag committed"
        );
        Ok(outcome)
    }

    /// Ends the session without a drop
    ///
    /// Under [`CancelPolicy::RevertPreview`] the card is put back where it
    /// was picked up; otherwise it stays where the last preview moved it.
    pub fn cancel_drag(&mut self, board: &mut Board) -> Option<DragSession> {
        let session = self.state.take()?;

        if self.cancel_policy == CancelPolicy::RevertPreview {
            revert_preview(board, &session);
        }

        debug!(card = %session.active_item, "drag cancelled");
        Some(session)
    }
}

fn revert_preview(board: &mut Board, session: &DragSession) {
    let Some(current) = board.locate_card(&session.active_item) else {
        return;
    };
    let Some(origin) = board.column_index(&session.origin_column) else {
        warn!(column = %session.origin_column, "origin column gone, cannot revert drag");
        return;
    };
    if current.column_index == origin && current.index == session.origin_index {
        return;
    }

    if let Err(e) = reorder::transfer(
        board,
        &session.active_item,
        &session.origin_column,
        session.origin_index,
    ) {
        warn!(card = %session.active_item, error = %e, "failed to revert drag preview");
    }
}
