pub mod controller;
pub mod event;
pub mod session;

pub use controller::{DragController, DropOutcome, OverOutcome};
pub use event::DragEvent;
pub use session::{DragSession, DragState};
