use thiserror::Error;

pub type Result<T> = std::result::Result<T, DndError>;

#[derive(Debug, Error)]
pub enum DndError {
    #[error("A drag session is already active")]
    AlreadyDragging,

    #[error("No drag session is active")]
    NotDragging,

    #[error("Drag target could not be resolved: {0}")]
    UnresolvedTarget(String),

    #[error("Drag ended outside any drop target")]
    NoDropTarget,

    #[error("Column not found: {0}")]
    UnknownColumn(String),

    #[error("Card not found: {0}")]
    UnknownCard(String),

    #[error("Card title must not be empty")]
    EmptyTitle,

    #[error("Index {index} out of range for column of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate id on board: {0}")]
    DuplicateId(String),

    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
