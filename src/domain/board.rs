use crate::domain::card::{Card, CardId};
use crate::domain::ids::IdGenerator;
use crate::error::{DndError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ColumnId {
    type Err = DndError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DndError::InvalidId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A named, ordered bucket of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Card>,
}

impl Column {
    pub fn new(id: ColumnId, name: String) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
        }
    }

    /// Index of the card within this column
    pub fn position_of(&self, card: &CardId) -> Option<usize> {
        self.items.iter().position(|c| &c.id == card)
    }

    pub fn get(&self, card: &CardId) -> Option<&Card> {
        self.items.iter().find(|c| &c.id == card)
    }

    pub fn card_ids(&self) -> Vec<CardId> {
        self.items.iter().map(|c| c.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Where a card currently sits on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLocation {
    pub column_index: usize,
    pub index: usize,
}

/// A resolved drag-over or drop target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Hovering a card: insert adjacent to it
    Card {
        id: CardId,
        location: CardLocation,
    },
    /// Hovering a column's empty space: append
    Column { id: ColumnId, column_index: usize },
}

impl DropTarget {
    pub fn column_index(&self) -> usize {
        match self {
            Self::Card { location, .. } => location.column_index,
            Self::Column { column_index, .. } => *column_index,
        }
    }
}

/// Board configuration used to seed a new board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Default Board".to_string(),
            columns: vec![
                "Todo".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
        }
    }
}

/// Kanban board state: an ordered sequence of columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Builds a board with one empty column per configured name
    pub fn from_config(config: &BoardConfig, ids: &mut dyn IdGenerator) -> Self {
        let columns = config
            .columns
            .iter()
            .map(|name| Column::new(ids.next_column_id(), name.clone()))
            .collect();
        Self {
            name: config.name.clone(),
            columns,
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == id)
    }

    /// Finds the column and index currently holding the card
    pub fn locate_card(&self, card: &CardId) -> Option<CardLocation> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, col)| {
                col.position_of(card)
                    .map(|index| CardLocation {
                        column_index,
                        index,
                    })
            })
    }

    pub fn card(&self, card: &CardId) -> Option<&Card> {
        self.locate_card(card)
            .map(|loc| &self.columns[loc.column_index].items[loc.index])
    }

    /// Resolves a raw id from the input layer to a card or column
    ///
    /// Cards are checked first, so an id naming both resolves to the card.
    pub fn resolve_target(&self, id: &str) -> Option<DropTarget> {
        let card_id = CardId::new(id);
        if let Some(location) = self.locate_card(&card_id) {
            return Some(DropTarget::Card {
                id: card_id,
                location,
            });
        }

        let column_id = ColumnId::new(id);
        self.column_index(&column_id)
            .map(|column_index| DropTarget::Column {
                id: column_id,
                column_index,
            })
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// All card ids in board order
    pub fn card_ids(&self) -> Vec<CardId> {
        self.columns
            .iter()
            .flat_map(|col| col.items.iter().map(|c| c.id.clone()))
            .collect()
    }

    /// Checks that column ids are unique and every card is owned exactly once
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        for col in &self.columns {
            if !column_ids.insert(&col.id) {
                return Err(DndError::DuplicateId(col.id.to_string()));
            }
        }

        let mut card_ids = HashSet::new();
        for card in self.columns.iter().flat_map(|col| col.items.iter()) {
            if !card_ids.insert(&card.id) {
                return Err(DndError::DuplicateId(card.id.to_string()));
            }
        }

        Ok(())
    }

    /// Serializes the board for rendering or external persistence
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a board snapshot, rejecting one that breaks ownership rules
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(json)?;
        board.validate()?;
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIdGenerator;

    fn sample_board() -> Board {
        let mut todo = Column::new(ColumnId::new("todo"), "Todo".to_string());
        for id in ["a", "b", "c"] {
            todo.items.push(Card::new(CardId::new(id), id.to_uppercase()));
        }
        let done = Column::new(ColumnId::new("done"), "Done".to_string());

        Board {
            name: "Test".to_string(),
            columns: vec![todo, done],
        }
    }

    #[test]
    fn test_column_id_parsing() {
        let id = ColumnId::from_str("col-1").unwrap();
        assert_eq!(id.as_str(), "col-1");

        assert!(matches!(
            ColumnId::from_str(""),
            Err(DndError::InvalidId(_))
        ));
        assert!(ColumnId::from_str("  ").is_err());
    }

    #[test]
    fn test_board_from_default_config() {
        let mut ids = SequentialIdGenerator::new();
        let board = Board::from_config(&BoardConfig::default(), &mut ids);

        assert_eq!(board.name, "Default Board");
        assert_eq!(board.columns.len(), 3);
        assert_eq!(board.columns[0].name, "Todo");
        assert_eq!(board.columns[0].id.as_str(), "col-1");
        assert_eq!(board.columns[2].id.as_str(), "col-3");
        assert_eq!(board.card_count(), 0);
    }

    #[test]
    fn test_locate_card() {
        let board = sample_board();

        let loc = board.locate_card(&CardId::new("c")).unwrap();
        assert_eq!(loc.column_index, 0);
        assert_eq!(loc.index, 2);

        assert!(board.locate_card(&CardId::new("zzz")).is_none());
    }

    #[test]
    fn test_resolve_target() {
        let board = sample_board();

        match board.resolve_target("b") {
            Some(DropTarget::Card { id, location }) => {
                assert_eq!(id.as_str(), "b");
                assert_eq!(location.index, 1);
            }
            other => panic!("expected card target, got {:?}", other),
        }

        match board.resolve_target("done") {
            Some(DropTarget::Column { column_index, .. }) => assert_eq!(column_index, 1),
            other => panic!("expected column target, got {:?}", other),
        }

        assert!(board.resolve_target("missing").is_none());
    }

    #[test]
    fn test_resolve_target_prefers_card() {
        let mut board = sample_board();
        board.columns[1]
            .items
            .push(Card::new(CardId::new("todo"), "Confusing".to_string()));

        assert!(matches!(
            board.resolve_target("todo"),
            Some(DropTarget::Card { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_card() {
        let mut board = sample_board();
        assert!(board.validate().is_ok());

        board.columns[1]
            .items
            .push(Card::new(CardId::new("a"), "Copy".to_string()));

        match board.validate() {
            Err(DndError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_column() {
        let mut board = sample_board();
        board
            .columns
            .push(Column::new(ColumnId::new("todo"), "Again".to_string()));

        assert!(matches!(board.validate(), Err(DndError::DuplicateId(_))));
    }

    #[test]
    fn test_json_snapshot() {
        let board = sample_board();
        let json = board.to_json().unwrap();
        let loaded = Board::from_json(&json).unwrap();

        assert_eq!(loaded.card_ids(), board.card_ids());
        assert_eq!(loaded.columns[1].id.as_str(), "done");
    }

    #[test]
    fn test_from_json_rejects_shared_card() {
        let json = r#"{
        "name": "Broken",
        "columns": [
            { "id": "todo", "name": "Todo", "items": [
                { "id": "a", "title": "A", "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z" }
            ] },
            { "id": "done", "name": "Done", "items": [
                { "id": "a", "title": "A", "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z" }
            ] }
        ]
    }"#;

        assert!(matches!(
            Board::from_json(json),
            Err(DndError::DuplicateId(_))
        ));
    }
}
