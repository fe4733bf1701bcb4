//! # Hlavi DnD
//!
//! Drag-and-drop reordering engine for Hlavi kanban boards.
//!
//! This crate tracks one drag gesture at a time across a board of columns and
//! cards, previews cross-column moves while the pointer is moving, and commits
//! a consistent ordering on drop. It takes resolved ids from an input layer
//! and does no rendering, geometry or I/O of its own.

pub mod config;
pub mod domain;
pub mod drag;
pub mod engine;
pub mod error;
pub mod notify;

// Re-export commonly used types
pub use config::{CancelPolicy, EngineConfig};
pub use domain::{
    board::{Board, BoardConfig, CardLocation, Column, ColumnId, DropTarget},
    card::{Card, CardId},
    ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator},
    reorder::{Move, MoveOutcome},
};
pub use drag::{DragController, DragEvent, DragSession, DragState, DropOutcome, OverOutcome};
pub use engine::{BoardEngine, BoardView};
pub use error::{DndError, Result};
pub use notify::{ChannelObserver, CommitEvent, CommitObserver};
