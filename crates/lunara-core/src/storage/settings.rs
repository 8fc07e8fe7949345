//! Scalar tracker settings in the key-value store.
//!
//! The reference start date and personal cycle length are single
//! values, stored under their own keys rather than inside the history
//! log: clearing or changing them must never touch logged history.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::StorageError;
use crate::storage::kv::KeyValueStore;

/// Key holding the reference start date as an RFC3339 timestamp.
pub const REFERENCE_START_KEY: &str = "cycle.reference_start";
/// Key holding the personal cycle length in days.
pub const CYCLE_LENGTH_KEY: &str = "cycle.length";

/// Stored reference start date, if any.
///
/// An unreadable stored value is logged and treated as unset; a broken
/// date must degrade to "nothing tracked yet", not a hard failure.
pub fn reference_start(kv: &dyn KeyValueStore) -> Result<Option<NaiveDate>, StorageError> {
    Ok(kv.load(REFERENCE_START_KEY)?.and_then(|raw| parse_date(&raw)))
}

/// Persist `date` as the reference start, stored at midnight UTC.
pub fn set_reference_start(kv: &dyn KeyValueStore, date: NaiveDate) -> Result<(), StorageError> {
    let stamp = date.and_time(NaiveTime::MIN).and_utc().to_rfc3339();
    kv.save(REFERENCE_START_KEY, &stamp)
}

/// Forget the reference start date.
pub fn clear_reference_start(kv: &dyn KeyValueStore) -> Result<(), StorageError> {
    kv.remove(REFERENCE_START_KEY)
}

/// Stored personal cycle length, or `default` when the key is missing
/// or holds something unusable.
pub fn cycle_length(kv: &dyn KeyValueStore, default: u32) -> Result<u32, StorageError> {
    let stored = kv.load(CYCLE_LENGTH_KEY)?.and_then(|raw| {
        match raw.trim().parse::<u32>() {
            Ok(length) if length >= 1 => Some(length),
            _ => {
                tracing::warn!("ignoring stored cycle length {raw:?}");
                None
            }
        }
    });
    Ok(stored.unwrap_or(default))
}

/// Persist the personal cycle length.
pub fn set_cycle_length(kv: &dyn KeyValueStore, length: u32) -> Result<(), StorageError> {
    kv.save(CYCLE_LENGTH_KEY, &length.to_string())
}

/// Accepts RFC3339 timestamps (the write format) as well as plain
/// `YYYY-MM-DD` dates (hand-edited or imported values).
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    match raw.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!("ignoring unreadable reference start {raw:?}: {err}");
            None
        }
    }
}

/// Snapshot of both scalar settings.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerSettings {
    pub reference_start: Option<NaiveDate>,
    pub cycle_length: u32,
}

impl TrackerSettings {
    /// Load both settings; `default_length` backs a missing length.
    pub fn load(kv: &dyn KeyValueStore, default_length: u32) -> Result<Self, StorageError> {
        Ok(TrackerSettings {
            reference_start: reference_start(kv)?,
            cycle_length: cycle_length(kv, default_length)?,
        })
    }
}
