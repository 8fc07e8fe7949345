use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Every successfully persisted history mutation produces an event.
/// Subscribers (UI layers, exporters) receive them synchronously after
/// the write lands; a failed persist never emits one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HistoryEvent {
    EntryAdded {
        id: String,
        start_date: NaiveDate,
        at: DateTime<Utc>,
    },
    EntryUpdated {
        id: String,
        at: DateTime<Utc>,
    },
    EntryDeleted {
        id: String,
        at: DateTime<Utc>,
    },
}

impl HistoryEvent {
    /// Id of the log entry this event concerns.
    pub fn entry_id(&self) -> &str {
        match self {
            HistoryEvent::EntryAdded { id, .. }
            | HistoryEvent::EntryUpdated { id, .. }
            | HistoryEvent::EntryDeleted { id, .. } => id,
        }
    }
}
