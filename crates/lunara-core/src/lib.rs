//! # Lunara Core Library
//!
//! This library provides the core logic for Lunara, a menstrual-cycle
//! phase tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI is a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Phase Engine**: Pure calendar math that maps a reference start
//!   date and cycle length to one of four energy phases
//! - **History**: Logged cycle starts with lengths derived from the
//!   gaps between consecutive entries, plus rolling statistics
//! - **Storage**: A pluggable key-value store (SQLite or in-memory)
//!   and TOML-based configuration
//! - **Guidance**: Static per-phase content for activities, fertility,
//!   partner support, and workouts
//!
//! ## Key Components
//!
//! - [`compute_phase`]: Resolve the phase for a given day
//! - [`CycleHistoryStore`]: Persistent log of cycle start dates
//! - [`CycleStatsAnalyzer`]: Average length and trend over the log
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod guidance;
pub mod history;
pub mod phase;
pub mod storage;

pub use error::{CoreError, Result, StorageError, ValidationError};
pub use events::HistoryEvent;
pub use history::{
    recompute, CycleEntry, CycleHistoryStore, CycleStatsAnalyzer, CycleStatsSummary, CycleTrend,
    EntryPatch,
};
pub use phase::{compute_phase, CyclePhase, Phase, PhaseProfile, PhaseWindow};
pub use storage::{data_dir, Config, KeyValueStore, MemoryStore, SqliteStore, TrackerSettings};
