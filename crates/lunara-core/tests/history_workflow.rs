//! Integration tests for the cycle tracking workflow.
//!
//! Exercises the full path from logging cycle starts through derived
//! lengths, persistence across store reopens, change events, and the
//! statistics built on top of the log.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use lunara_core::storage::settings;
use lunara_core::{
    compute_phase, CycleHistoryStore, CycleStatsAnalyzer, CycleTrend, EntryPatch, HistoryEvent,
    KeyValueStore, MemoryStore, Phase, SqliteStore,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_log_persists_across_reopen() {
    let kv = MemoryStore::new();

    // First session: log three starts out of order.
    let mut store = CycleHistoryStore::open(Box::new(kv.clone())).unwrap();
    store.add_entry(d(2024, 1, 1), "first tracked cycle").unwrap();
    store.add_entry(d(2024, 2, 25), "").unwrap();
    store.add_entry(d(2024, 1, 29), "").unwrap();
    drop(store);

    // Second session: same backend, fresh store.
    let store = CycleHistoryStore::open(Box::new(kv)).unwrap();
    let log = store.entries();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].start_date, d(2024, 2, 25));
    assert_eq!(log[0].cycle_length, None);
    assert_eq!(log[1].cycle_length, Some(27));
    assert_eq!(log[2].cycle_length, Some(28));
    assert_eq!(log[2].note, "first tracked cycle");
}

#[test]
fn test_sqlite_file_backend_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lunara.db");

    let mut store =
        CycleHistoryStore::open(Box::new(SqliteStore::open_at(&path).unwrap())).unwrap();
    let log = store.add_entry(d(2024, 3, 1), "on disk").unwrap();
    let id = log[0].id.clone();
    drop(store);

    let store = CycleHistoryStore::open(Box::new(SqliteStore::open_at(&path).unwrap())).unwrap();
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].id, id);
    assert_eq!(store.entries()[0].note, "on disk");
}

#[test]
fn test_edits_and_deletes_are_persisted() {
    let kv = MemoryStore::new();
    let mut store = CycleHistoryStore::open(Box::new(kv.clone())).unwrap();
    store.add_entry(d(2024, 1, 1), "").unwrap();
    store.add_entry(d(2024, 1, 29), "").unwrap();
    let log = store.add_entry(d(2024, 2, 25), "").unwrap();
    let middle_id = log[1].id.clone();
    let oldest_id = log[2].id.clone();

    store
        .update_entry(&oldest_id, EntryPatch::new().with_note("edited"))
        .unwrap();
    store.delete_entry(&middle_id).unwrap();

    let store = CycleHistoryStore::open(Box::new(kv)).unwrap();
    let log = store.entries();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].note, "edited");
    // 2024-01-01 to 2024-02-25 is 55 days, still a plausible span.
    assert_eq!(log[1].cycle_length, Some(55));
}

#[test]
fn test_change_events_across_the_lifecycle() {
    let mut store = CycleHistoryStore::open(Box::new(MemoryStore::new())).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    let log = store.add_entry(d(2024, 1, 1), "").unwrap();
    let id = log[0].id.clone();
    store
        .update_entry(&id, EntryPatch::new().with_start_date(d(2024, 1, 2)))
        .unwrap();
    store.delete_entry(&id).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(matches!(
        seen[0],
        HistoryEvent::EntryAdded { ref start_date, .. } if *start_date == d(2024, 1, 1)
    ));
    assert!(matches!(seen[1], HistoryEvent::EntryUpdated { .. }));
    assert!(matches!(seen[2], HistoryEvent::EntryDeleted { .. }));
}

#[test]
fn test_settings_resolution_and_phase_end_to_end() {
    // One app session: settings and history share a SQLite backend.
    let kv = SqliteStore::open_memory().unwrap();
    settings::set_reference_start(&kv, d(2024, 3, 24)).unwrap();
    settings::set_cycle_length(&kv, 28).unwrap();

    let reference = settings::reference_start(&kv).unwrap();
    let length = settings::cycle_length(&kv, 28).unwrap();
    assert_eq!(reference, Some(d(2024, 3, 24)));

    let mut store = CycleHistoryStore::open(Box::new(kv)).unwrap();
    store.add_entry(d(2024, 1, 29), "").unwrap();
    store.add_entry(d(2024, 2, 25), "").unwrap();

    // The newest logged entry is open until resolved against the
    // reference start of the cycle in progress.
    assert_eq!(store.entries()[0].cycle_length, None);
    let resolved = store.resolve_current(reference);
    assert_eq!(resolved[0].cycle_length, Some(28));

    // Day 12 of the current cycle falls in the peak window.
    let phase = compute_phase(reference, length, d(2024, 4, 4))
        .unwrap()
        .unwrap();
    assert_eq!(phase.day_in_cycle, 12);
    assert_eq!(phase.phase, Phase::Manifestation);
}

#[test]
fn test_stats_over_resolved_log() {
    let mut store = CycleHistoryStore::open(Box::new(MemoryStore::new())).unwrap();
    store.add_entry(d(2024, 1, 1), "").unwrap();
    store.add_entry(d(2024, 1, 29), "").unwrap();
    store.add_entry(d(2024, 2, 25), "").unwrap();

    let analyzer = CycleStatsAnalyzer::new();

    // Unresolved: two derived lengths, 27 and 28.
    let summary = analyzer.summarize(store.entries());
    assert_eq!(summary.with_length, 2);
    assert_eq!(summary.average_length, Some(27.5));

    // Resolving against an ongoing cycle adds a third length (30 days,
    // 2024-02-25 to 2024-03-26), enough to tip the trend.
    let resolved = store.resolve_current(Some(d(2024, 3, 26)));
    let summary = analyzer.summarize(&resolved);
    assert_eq!(summary.with_length, 3);
    assert_eq!(summary.average_length, Some(28.3));
    assert_eq!(summary.trend, CycleTrend::Lengthening);
}

#[test]
fn test_corrupt_history_does_not_block_settings() {
    let kv = MemoryStore::new();
    kv.save("cycle.history", "not even close to json").unwrap();
    settings::set_cycle_length(&kv, 30).unwrap();

    let store = CycleHistoryStore::open(Box::new(kv.clone())).unwrap();
    assert!(store.entries().is_empty());
    assert_eq!(settings::cycle_length(&kv, 28).unwrap(), 30);
}
