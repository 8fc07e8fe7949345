//! Cycle log entry types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier of a cycle log entry.
pub type EntryId = String;

/// One recorded cycle start in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Reported first day of the cycle
    pub start_date: NaiveDate,
    /// Days until the next recorded start. Derived at write time;
    /// `None` for the newest entry and for implausible gaps.
    pub cycle_length: Option<u32>,
    /// Free-form user note
    #[serde(default)]
    pub note: String,
}

impl CycleEntry {
    /// Create a new entry with a fresh id and no derived length yet.
    pub fn new(start_date: NaiveDate, note: impl Into<String>) -> Self {
        CycleEntry {
            id: uuid::Uuid::new_v4().to_string(),
            start_date,
            cycle_length: None,
            note: note.into().trim().to_string(),
        }
    }
}

/// Partial update for an existing entry. `None` fields stay untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    pub start_date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.note.is_none()
    }
}
