//! Kubernetes event records as seen by the assertion helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TestError;

/// A recorded occurrence with its cumulative counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl Event {
    pub fn new(message: impl Into<String>, count: u32) -> Self {
        Self {
            message: message.into(),
            count,
            reason: None,
            event_type: None,
            last_timestamp: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<Event>,
}

// The events API leaves `count` null for events recorded through a series.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses the JSON of a Kubernetes `EventList`, keeping the order of `items`.
pub fn parse_event_list(json: &str) -> Result<Vec<Event>, TestError> {
    let list: EventList = serde_json::from_str(json)?;
    Ok(list.items)
}
