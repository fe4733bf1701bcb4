use crate::domain::board::Board;
use crate::drag::controller::DropOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// A committed drop: the resulting board plus what moved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitEvent {
    pub board: Board,
    pub outcome: DropOutcome,
    pub committed_at: DateTime<Utc>,
}

impl CommitEvent {
    pub fn new(board: Board, outcome: DropOutcome) -> Self {
        Self {
            board,
            outcome,
            committed_at: Utc::now(),
        }
    }
}

/// Receives committed drops; saving the board is up to the implementor
pub trait CommitObserver: Send {
    fn on_commit(&self, event: &CommitEvent);
}

impl<F> CommitObserver for F
where
    F: Fn(&CommitEvent) + Send,
{
    fn on_commit(&self, event: &CommitEvent) {
        self(event)
    }
}

/// Forwards commits to an async consumer over an unbounded channel
///
/// Sending never blocks the caller. If the receiver has been dropped the
/// event is discarded with a warning.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<CommitEvent>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::UnboundedSender<CommitEvent>) -> Self {
        Self { tx }
    }

    /// Creates an observer together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<CommitEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl CommitObserver for ChannelObserver {
    fn on_commit(&self, event: &CommitEvent) {
        if self.tx.send(event.clone()).is_err() {
            warn!(card = %event.outcome.card, "commit receiver closed, dropping event");
        }
    }
}
