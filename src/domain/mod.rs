pub mod board;
pub mod card;
pub mod ids;
pub mod mutation;
pub mod reorder;

pub use board::{Board, BoardConfig, CardLocation, Column, ColumnId, DropTarget};
pub use card::{Card, CardId};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use reorder::{apply_move, apply_move_to_snapshot, drop_index, Move, MoveOutcome};
