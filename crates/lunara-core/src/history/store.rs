//! Persistent cycle history log.
//!
//! The store owns the full log in memory and treats the key-value
//! backend as a dumb blob sink: load once at open, rewrite the whole
//! serialized log on every mutation. Cycle lengths are derived fields
//! and recomputed from scratch on each write, so a stored log is always
//! internally consistent no matter which entry changed.
//!
//! When a save fails the in-memory log keeps the mutation and the error
//! is returned; no change event fires for writes that never landed.

use chrono::{NaiveDate, Utc};

use crate::error::{Result, StorageError, ValidationError};
use crate::events::HistoryEvent;
use crate::history::entry::{CycleEntry, EntryPatch};
use crate::storage::KeyValueStore;

/// Storage key holding the serialized log.
pub const HISTORY_KEY: &str = "cycle.history";

/// Gaps of this many days or more between recorded starts are treated
/// as a tracking pause, not a real cycle, and derive no length.
pub const MAX_PLAUSIBLE_GAP_DAYS: i64 = 100;

/// Days between two start dates when that gap is a believable cycle
/// length, `None` otherwise (non-positive or implausibly long).
fn plausible_gap(later: NaiveDate, earlier: NaiveDate) -> Option<u32> {
    let days = (later - earlier).num_days();
    (days > 0 && days < MAX_PLAUSIBLE_GAP_DAYS).then_some(days as u32)
}

/// Re-derives every entry's `cycle_length` from the log's start dates.
///
/// Sorts descending by start date, then gives each entry the day gap up
/// to its successor. The newest entry has no successor yet and always
/// carries `None`.
pub fn recompute(entries: &mut Vec<CycleEntry>) {
    entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    for i in 1..entries.len() {
        let later = entries[i - 1].start_date;
        entries[i].cycle_length = plausible_gap(later, entries[i].start_date);
    }
    if let Some(newest) = entries.first_mut() {
        newest.cycle_length = None;
    }
}

/// CRUD store for the cycle history log.
pub struct CycleHistoryStore {
    kv: Box<dyn KeyValueStore>,
    log: Vec<CycleEntry>,
    subscribers: Vec<Box<dyn Fn(&HistoryEvent) + Send>>,
}

impl CycleHistoryStore {
    /// Load the log from `kv` and cache it.
    ///
    /// A missing key is an empty log. A present but unreadable value is
    /// logged and discarded rather than wedging the tracker; a failing
    /// backend read still surfaces as an error.
    pub fn open(kv: Box<dyn KeyValueStore>) -> Result<Self> {
        let mut log = match kv.load(HISTORY_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<CycleEntry>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!("discarding unreadable cycle history: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        recompute(&mut log);
        Ok(CycleHistoryStore {
            kv,
            log,
            subscribers: Vec::new(),
        })
    }

    /// The cached log, newest first, derived lengths already consistent.
    pub fn entries(&self) -> &[CycleEntry] {
        &self.log
    }

    /// Register a callback invoked after each successfully saved change.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&HistoryEvent) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Append a new entry and return the updated log.
    pub fn add_entry(
        &mut self,
        start_date: NaiveDate,
        note: impl Into<String>,
    ) -> Result<Vec<CycleEntry>> {
        let entry = CycleEntry::new(start_date, note);
        let event = HistoryEvent::EntryAdded {
            id: entry.id.clone(),
            start_date,
            at: Utc::now(),
        };
        self.log.push(entry);
        recompute(&mut self.log);
        self.persist(event)?;
        Ok(self.log.clone())
    }

    /// Apply a patch to an existing entry and return the updated log.
    pub fn update_entry(&mut self, id: &str, patch: EntryPatch) -> Result<Vec<CycleEntry>> {
        let entry = self
            .log
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ValidationError::EntryNotFound { id: id.to_string() })?;
        if let Some(start_date) = patch.start_date {
            entry.start_date = start_date;
        }
        if let Some(note) = patch.note {
            entry.note = note.trim().to_string();
        }
        recompute(&mut self.log);
        self.persist(HistoryEvent::EntryUpdated {
            id: id.to_string(),
            at: Utc::now(),
        })?;
        Ok(self.log.clone())
    }

    /// Remove an entry if present and return the updated log.
    ///
    /// Deleting an unknown id succeeds without touching storage; there
    /// is nothing to undo and re-running a delete should not fail.
    pub fn delete_entry(&mut self, id: &str) -> Result<Vec<CycleEntry>> {
        let before = self.log.len();
        self.log.retain(|e| e.id != id);
        if self.log.len() == before {
            return Ok(self.log.clone());
        }
        recompute(&mut self.log);
        self.persist(HistoryEvent::EntryDeleted {
            id: id.to_string(),
            at: Utc::now(),
        })?;
        Ok(self.log.clone())
    }

    /// Read-side view with the newest entry's length resolved against
    /// the active reference start. The filled value is never persisted;
    /// the stored newest entry stays open until a later start lands.
    pub fn resolve_current(&self, reference_start: Option<NaiveDate>) -> Vec<CycleEntry> {
        let mut entries = self.log.clone();
        if let (Some(reference), Some(newest)) = (reference_start, entries.first_mut()) {
            if newest.cycle_length.is_none() {
                newest.cycle_length = plausible_gap(reference, newest.start_date);
            }
        }
        entries
    }

    fn persist(&mut self, event: HistoryEvent) -> Result<()> {
        let raw =
            serde_json::to_string(&self.log).map_err(|source| StorageError::EncodeFailed {
                key: HISTORY_KEY.to_string(),
                source,
            })?;
        self.kv.save(HISTORY_KEY, &raw)?;
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::CoreError;
    use crate::storage::MemoryStore;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn open_empty() -> CycleHistoryStore {
        CycleHistoryStore::open(Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_open_with_no_stored_log() {
        let store = open_empty();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_add_sorts_and_derives_lengths() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "first").unwrap();
        store.add_entry(d(2024, 2, 25), "").unwrap();
        let log = store.add_entry(d(2024, 1, 29), "middle").unwrap();

        assert_eq!(log.len(), 3);
        assert_eq!(log[0].start_date, d(2024, 2, 25));
        assert_eq!(log[0].cycle_length, None);
        assert_eq!(log[1].start_date, d(2024, 1, 29));
        assert_eq!(log[1].cycle_length, Some(27));
        assert_eq!(log[2].start_date, d(2024, 1, 1));
        assert_eq!(log[2].cycle_length, Some(28));
    }

    #[test]
    fn test_duplicate_start_dates_derive_no_length() {
        let mut store = open_empty();
        store.add_entry(d(2024, 3, 1), "").unwrap();
        let log = store.add_entry(d(2024, 3, 1), "again").unwrap();
        assert_eq!(log[0].cycle_length, None);
        assert_eq!(log[1].cycle_length, None);
    }

    #[test]
    fn test_plausibility_ceiling() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "").unwrap();
        store.add_entry(d(2024, 4, 9), "").unwrap(); // 99 days later
        let log = store.add_entry(d(2024, 7, 18), "").unwrap(); // 100 days later

        assert_eq!(log[2].cycle_length, Some(99));
        assert_eq!(log[1].cycle_length, None);
    }

    #[test]
    fn test_update_moves_entry_and_recomputes() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "").unwrap();
        let log = store.add_entry(d(2024, 1, 29), "").unwrap();
        let moved_id = log[1].id.clone();

        let log = store
            .update_entry(&moved_id, EntryPatch::new().with_start_date(d(2024, 2, 26)))
            .unwrap();
        assert_eq!(log[0].id, moved_id);
        assert_eq!(log[0].cycle_length, None);
        assert_eq!(log[1].start_date, d(2024, 1, 29));
        assert_eq!(log[1].cycle_length, Some(28));
    }

    #[test]
    fn test_update_trims_note_and_keeps_date() {
        let mut store = open_empty();
        let log = store.add_entry(d(2024, 1, 1), "old").unwrap();
        let id = log[0].id.clone();

        let log = store
            .update_entry(&id, EntryPatch::new().with_note("  new note "))
            .unwrap();
        assert_eq!(log[0].note, "new note");
        assert_eq!(log[0].start_date, d(2024, 1, 1));
    }

    #[test]
    fn test_update_unknown_id_is_an_error() {
        let mut store = open_empty();
        let err = store
            .update_entry("missing", EntryPatch::new().with_note("x"))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_recomputes_neighbors() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "").unwrap();
        store.add_entry(d(2024, 1, 29), "").unwrap();
        let log = store.add_entry(d(2024, 2, 25), "").unwrap();
        let middle_id = log[1].id.clone();

        let log = store.delete_entry(&middle_id).unwrap();
        assert_eq!(log.len(), 2);
        // The surviving older entry now spans the whole 55-day gap.
        assert_eq!(log[1].cycle_length, Some(55));
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "").unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        let log = store.delete_entry("missing").unwrap();
        assert_eq!(log.len(), 1);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_events_fire_after_successful_saves() {
        let mut store = open_empty();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        let log = store.add_entry(d(2024, 1, 1), "").unwrap();
        let id = log[0].id.clone();
        store
            .update_entry(&id, EntryPatch::new().with_note("n"))
            .unwrap();
        store.delete_entry(&id).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(matches!(seen[0], HistoryEvent::EntryAdded { .. }));
        assert!(matches!(seen[1], HistoryEvent::EntryUpdated { .. }));
        assert!(matches!(seen[2], HistoryEvent::EntryDeleted { .. }));
        assert!(seen.iter().all(|event| event.entry_id() == id));
    }

    #[test]
    fn test_failed_save_keeps_mutation_and_suppresses_event() {
        struct FailingStore;
        impl KeyValueStore for FailingStore {
            fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }
            fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::WriteFailed {
                    key: key.to_string(),
                    message: "disk full".to_string(),
                })
            }
            fn remove(&self, _key: &str) -> Result<(), StorageError> {
                Ok(())
            }
        }

        let mut store = CycleHistoryStore::open(Box::new(FailingStore)).unwrap();
        let fired = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&fired);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);

        let err = store.add_entry(d(2024, 1, 1), "kept").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Storage(StorageError::WriteFailed { .. })
        ));
        // The cache still holds the entry; only persistence failed.
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].note, "kept");
        assert_eq!(*fired.lock().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_stored_log_loads_empty() {
        let kv = MemoryStore::new();
        kv.save(HISTORY_KEY, "{not json").unwrap();
        let store = CycleHistoryStore::open(Box::new(kv)).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_loaded_log_is_renormalized() {
        // Stored lengths are stale on purpose; open must rederive them.
        let kv = MemoryStore::new();
        let raw = r#"[
            {"id":"a","start_date":"2024-01-01","cycle_length":99,"note":""},
            {"id":"b","start_date":"2024-01-29","cycle_length":5,"note":""}
        ]"#;
        kv.save(HISTORY_KEY, raw).unwrap();

        let store = CycleHistoryStore::open(Box::new(kv)).unwrap();
        let log = store.entries();
        assert_eq!(log[0].id, "b");
        assert_eq!(log[0].cycle_length, None);
        assert_eq!(log[1].cycle_length, Some(28));
    }

    #[test]
    fn test_resolve_current_fills_newest_only() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "").unwrap();
        store.add_entry(d(2024, 1, 29), "").unwrap();

        let resolved = store.resolve_current(Some(d(2024, 2, 25)));
        assert_eq!(resolved[0].cycle_length, Some(27));
        assert_eq!(resolved[1].cycle_length, Some(28));
        // The cached log is untouched.
        assert_eq!(store.entries()[0].cycle_length, None);

        let unresolved = store.resolve_current(None);
        assert_eq!(unresolved[0].cycle_length, None);
    }

    #[test]
    fn test_resolve_current_respects_plausibility() {
        let mut store = open_empty();
        store.add_entry(d(2024, 1, 1), "").unwrap();

        // Reference on the entry's own date: zero gap, not a cycle.
        let resolved = store.resolve_current(Some(d(2024, 1, 1)));
        assert_eq!(resolved[0].cycle_length, None);

        // Reference half a year out: tracking pause, not a cycle.
        let resolved = store.resolve_current(Some(d(2024, 7, 1)));
        assert_eq!(resolved[0].cycle_length, None);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut entries = vec![
            CycleEntry::new(d(2024, 1, 29), ""),
            CycleEntry::new(d(2024, 1, 1), ""),
            CycleEntry::new(d(2024, 2, 25), ""),
        ];
        recompute(&mut entries);
        let once = entries.clone();
        recompute(&mut entries);
        assert_eq!(entries, once);
    }
}
