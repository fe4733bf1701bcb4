use serde::{Deserialize, Serialize};

/// Resolved drag events from the input/collision layer
///
/// Ids are raw strings: `over_id` may name either a card or a column, and is
/// absent when the pointer is over no droppable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    DragStart {
        item_id: String,
    },
    DragOver {
        active_id: String,
        #[serde(default)]
        over_id: Option<String>,
    },
    DragEnd {
        active_id: String,
        #[serde(default)]
        over_id: Option<String>,
    },
    DragCancelled,
}

impl DragEvent {
    pub fn start(item_id: impl Into<String>) -> Self {
        Self::DragStart {
            item_id: item_id.into(),
        }
    }

    pub fn over(active_id: impl Into<String>, over_id: Option<&str>) -> Self {
        Self::DragOver {
            active_id: active_id.into(),
            over_id: over_id.map(str::to_string),
        }
    }

    pub fn end(active_id: impl Into<String>, over_id: Option<&str>) -> Self {
        Self::DragEnd {
            active_id: active_id.into(),
            over_id: over_id.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let event: DragEvent =
            serde_json::from_str(r#"{ "type": "drag_over", "active_id": "a" }"#).unwrap();
        assert_eq!(event, DragEvent::over("a", None));

        let event: DragEvent = serde_json::from_str(
            r#"{ "type": "drag_end", "active_id": "a", "over_id": "done" }"#,
        )
        .unwrap();
        assert_eq!(event, DragEvent::end("a", Some("done")));

        let event: DragEvent = serde_json::from_str(r#"{ "type": "drag_cancelled" }"#).unwrap();
        assert_eq!(event, DragEvent::DragCancelled);
    }
}
