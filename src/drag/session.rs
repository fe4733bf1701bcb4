use crate::domain::board::ColumnId;
use crate::domain::card::CardId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Controller state - either idle or tracking one drag
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Transient state of one in-progress drag gesture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragSession {
    /// Card being dragged
    pub active_item: CardId,
    /// Column the card was picked up from
    pub origin_column: ColumnId,
    /// Index the card was picked up from
    pub origin_index: usize,
    /// Raw id of the card or column currently hovered, if any
    pub over_target: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl DragSession {
    pub fn new(active_item: CardId, origin_column: ColumnId, origin_index: usize) -> Self {
        Self {
            active_item,
            origin_column,
            origin_index,
            over_target: None,
            started_at: Utc::now(),
        }
    }
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Ends the session, returning to idle
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
