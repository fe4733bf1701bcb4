use crate::domain::{board::ColumnId, card::CardId};
use uuid::Uuid;

/// Source of fresh, board-unique ids
pub trait IdGenerator: Send {
    fn next_column_id(&mut self) -> ColumnId;

    fn next_card_id(&mut self) -> CardId;
}

/// Random v4 UUID ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_column_id(&mut self) -> ColumnId {
        ColumnId::new(Uuid::new_v4().to_string())
    }

    fn next_card_id(&mut self) -> CardId {
        CardId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic counter-based ids (col-1, card-1, ...)
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next_column_number: u32,
    next_card_number: u32,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// Prepends `prefix` to every id, e.g. `b1-col-1`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_column_number: 1,
            next_card_number: 1,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_column_id(&mut self) -> ColumnId {
        let id = ColumnId::new(format!("{}col-{}", self.prefix, self.next_column_number));
        self.next_column_number += 1;
        id
    }

    fn next_card_id(&mut self) -> CardId {
        let id = CardId::new(format!("{}card-{}", self.prefix, self.next_card_number));
        self.next_card_number += 1;
        id
    }
}
