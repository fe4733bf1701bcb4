use crate::domain::board::{Board, Column, ColumnId};
use crate::domain::card::{Card, CardId};
use crate::domain::ids::IdGenerator;
use crate::error::{DndError, Result};
use tracing::{debug, warn};

/// How many taken ids a generator may hand out in a row before giving up
const MAX_ID_ATTEMPTS: usize = 64;

impl Board {
    /// Appends a new empty column
    ///
    /// Fails with [`DndError::DuplicateId`] only if the generator keeps
    /// returning ids the board already uses.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        ids: &mut dyn IdGenerator,
    ) -> Result<ColumnId> {
        // Generators seeded fresh against a loaded board can hand out taken ids
        let mut id = ids.next_column_id();
        let mut attempts = 1;
        while self.column(&id).is_some() {
            if attempts == MAX_ID_ATTEMPTS {
                warn!(column = %id, attempts, "id generator exhausted");
                return Err(DndError::DuplicateId(id.to_string()));
            }
            id = ids.next_column_id();
            attempts += 1;
        }

        self.columns.push(Column::new(id.clone(), name.into()));
        debug!(column = %id, "added column");
        Ok(id)
    }

    /// Appends a new card to the end of `column`
    pub fn add_card(
        &mut self,
        column: &ColumnId,
        title: impl Into<String>,
        ids: &mut dyn IdGenerator,
    ) -> Result<CardId> {
        self.add_card_with_payload(column, title, serde_json::Value::Null, ids)
    }

    /// Appends a new card carrying an opaque payload
    ///
    /// An unknown column, a blank title or an exhausted id generator adds
    /// nothing.
    pub fn add_card_with_payload(
        &mut self,
        column: &ColumnId,
        title: impl Into<String>,
        payload: serde_json::Value,
        ids: &mut dyn IdGenerator,
    ) -> Result<CardId> {
        let title = title.into();
        let column_index = self
            .column_index(column)
            .ok_or_else(|| DndError::UnknownColumn(column.to_string()))?;
        if title.trim().is_empty() {
            return Err(DndError::EmptyTitle);
        }

        let mut id = ids.next_card_id();
        let mut attempts = 1;
        while self.locate_card(&id).is_some() {
            if attempts == MAX_ID_ATTEMPTS {
                warn!(card = %id, attempts, "id generator exhausted");
                return Err(DndError::DuplicateId(id.to_string()));
            }
            id = ids.next_card_id();
            attempts += 1;
        }

        self.columns[column_index]
            .items
            .push(Card::new(id.clone(), title).with_payload(payload));
        debug!(column = %column, card = %id, "added card");
        Ok(id)
    }

    /// Removes a card from whichever column holds it
    pub fn remove_card(&mut self, card: &CardId) -> Result<Card> {
        let loc = self
            .locate_card(card)
            .ok_or_else(|| DndError::UnknownCard(card.to_string()))?;
        let removed = self.columns[loc.column_index].items.remove(loc.index);
        debug!(card = %card, "removed card");
        Ok(removed)
    }

    pub fn rename_column(&mut self, column: &ColumnId, name: impl Into<String>) -> Result<()> {
        let column_index = self
            .column_index(column)
            .ok_or_else(|| DndError::UnknownColumn(column.to_string()))?;
        self.columns[column_index].name = name.into();
        Ok(())
    }

    /// Removes a column together with the cards it owns
    pub fn remove_column(&mut self, column: &ColumnId) -> Result<Column> {
        let column_index = self
            .column_index(column)
            .ok_or_else(|| DndError::UnknownColumn(column.to_string()))?;
        let removed = self.columns.remove(column_index);
        debug!(column = %column, cards = removed.len(), "removed column");
        Ok(removed)
    }

    pub fn update_card_title(&mut self, card: &CardId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DndError::EmptyTitle);
        }
        let loc = self
            .locate_card(card)
            .ok_or_else(|| DndError::UnknownCard(card.to_string()))?;
        self.columns[loc.column_index].items[loc.index].set_title(title);
        Ok(())
    }
}
