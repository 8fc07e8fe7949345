//! History module for Lunara
//!
//! This module owns the cycle log: entry records, the persistent CRUD
//! store with derived-length recompute and change events, and the
//! statistics (rolling average, trend) computed over the log.

mod entry;
mod stats;
mod store;

pub use entry::{CycleEntry, EntryId, EntryPatch};
pub use stats::{CycleStatsAnalyzer, CycleStatsSummary, CycleTrend};
pub use store::{recompute, CycleHistoryStore, HISTORY_KEY, MAX_PLAUSIBLE_GAP_DAYS};
