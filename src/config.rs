use crate::domain::board::BoardConfig;
use crate::error::{DndError, Result};
use serde::{Deserialize, Serialize};

/// What happens to live-preview moves when a drag is cancelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// The card stays wherever the last preview put it
    #[default]
    KeepPreview,
    /// The card goes back to the column and index it was picked up from
    RevertPreview,
}

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub cancel_policy: CancelPolicy,
    #[serde(default)]
    pub board: BoardConfig,
}

impl EngineConfig {
    /// Parses configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DndError::ConfigError(e.to_string()))
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }
}
