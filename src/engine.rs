use crate::config::EngineConfig;
use crate::domain::board::{Board, Column, ColumnId};
use crate::domain::card::{Card, CardId};
use crate::domain::ids::{IdGenerator, UuidIdGenerator};
use crate::drag::{DragController, DragEvent, DragSession, DropOutcome, OverOutcome};
use crate::error::{DndError, Result};
use crate::notify::{CommitEvent, CommitObserver};
use tracing::{debug, info};

/// Read-only view handed to the rendering layer
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub session: Option<&'a DragSession>,
}

impl<'a> BoardView<'a> {
    /// Card being dragged, for placeholder rendering
    pub fn active_id(&self) -> Option<&'a CardId> {
        self.session.map(|s| &s.active_item)
    }

    /// Card or column currently highlighted as the drop target
    pub fn over_id(&self) -> Option<&'a str> {
        self.session.and_then(|s| s.over_target.as_deref())
    }
}

/// Single owner of the board, its drag controller and id source
///
/// All writes to the board go through here. A multi-threaded host wraps the
/// engine in a mutex to keep writes serialized.
pub struct BoardEngine {
    board: Board,
    controller: DragController,
    ids: Box<dyn IdGenerator>,
    observers: Vec<Box<dyn CommitObserver>>,
}

impl BoardEngine {
    /// Creates an engine with a board seeded from `config` and UUID ids
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_id_generator(config, Box::new(UuidIdGenerator))
    }

    pub fn with_id_generator(config: &EngineConfig, mut ids: Box<dyn IdGenerator>) -> Self {
        let board = Board::from_config(&config.board, ids.as_mut());
        Self {
            board,
            controller: DragController::new(config.cancel_policy),
            ids,
            observers: Vec::new(),
        }
    }

    /// Wraps an existing board, e.g. one loaded from a snapshot
    pub fn from_board(
        board: Board,
        config: &EngineConfig,
        ids: Box<dyn IdGenerator>,
    ) -> Result<Self> {
        board.validate()?;
        Ok(Self {
            board,
            controller: DragController::new(config.cancel_policy),
            ids,
            observers: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.controller.session()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn snapshot(&self) -> BoardView<'_> {
        BoardView {
            board: &self.board,
            session: self.controller.session(),
        }
    }

    /// Registers an observer for committed drops
    pub fn subscribe(&mut self, observer: impl CommitObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn add_column(&mut self, name: impl Into<String>) -> Result<ColumnId> {
        self.board.add_column(name, self.ids.as_mut())
    }

    pub fn add_card(&mut self, column: &ColumnId, title: impl Into<String>) -> Result<CardId> {
        self.board.add_card(column, title, self.ids.as_mut())
    }

    pub fn add_card_with_payload(
        &mut self,
        column: &ColumnId,
        title: impl Into<String>,
        payload: serde_json::Value,
    ) -> Result<CardId> {
        self.board
            .add_card_with_payload(column, title, payload, self.ids.as_mut())
    }

    pub fn remove_card(&mut self, card: &CardId) -> Result<Card> {
        self.board.remove_card(card)
    }

    pub fn rename_column(&mut self, column: &ColumnId, name: impl Into<String>) -> Result<()> {
        self.board.rename_column(column, name)
    }

    pub fn remove_column(&mut self, column: &ColumnId) -> Result<Column> {
        self.board.remove_column(column)
    }

    pub fn update_card_title(&mut self, card: &CardId, title: impl Into<String>) -> Result<()> {
        self.board.update_card_title(card, title)
    }

    pub fn begin_drag(&mut self, item: &CardId) -> Result<()> {
        self.controller.begin_drag(&self.board, item)
    }

    pub fn update_over(&mut self, over: Option<&str>) -> Result<OverOutcome> {
        self.controller.update_over(&mut self.board, over)
    }

    /// Commits the drop and notifies observers
    pub fn end_drag(&mut self, active: &CardId, over: Option<&str>) -> Result<DropOutcome> {
        let outcome = self.controller.end_drag(&mut self.board, active, over)?;

        info!(
            card = %outcome.card,
            from = %outcome.from_column,
            to = %outcome.to_column,
            index = outcome.to_index,
            "drop committed"
        );
        if !self.observers.is_empty() {
            let event = CommitEvent::new(self.board.clone(), outcome.clone());
            for observer in &self.observers {
                observer.on_commit(&event);
            }
        }

        Ok(outcome)
    }

    pub fn cancel_drag(&mut self) -> Option<DragSession> {
        self.controller.cancel_drag(&mut self.board)
    }

    /// Applies one input event, tolerating events that do not resolve
    ///
    /// Fast pointer movement racing board edits routinely produces stale ids,
    /// so failures are logged and dropped rather than returned.
    pub fn handle(&mut self, event: DragEvent) {
        let result = match event {
            DragEvent::DragStart { item_id } => self.begin_drag(&CardId::new(item_id)),
            DragEvent::DragOver { active_id, over_id } => {
                self.handle_over(&active_id, over_id.as_deref())
            }
            DragEvent::DragEnd { active_id, over_id } => self
                .end_drag(&CardId::new(active_id), over_id.as_deref())
                .map(|_| ()),
            DragEvent::DragCancelled => {
                self.cancel_drag();
                Ok(())
            }
        };

        if let Err(e) = result {
            debug!(error = %e, "ignored drag event");
        }
    }

    fn handle_over(&mut self, active_id: &str, over: Option<&str>) -> Result<()> {
        let session = self.controller.session().ok_or(DndError::NotDragging)?;
        if session.active_item.as_str() != active_id {
            return Err(DndError::UnresolvedTarget(active_id.to_string()));
        }
        self.update_over(over).map(|_| ())
    }
}
