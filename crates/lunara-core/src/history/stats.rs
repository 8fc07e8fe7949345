//! Cycle length statistics
//!
//! This module analyzes derived cycle lengths from the history log and
//! reports two things a tracker actually acts on:
//! - **Rolling average**: mean of the most recent lengths, the value
//!   users adopt as their personal cycle length setting
//! - **Trend**: whether recent cycles are lengthening, shortening, or
//!   holding stable inside a tolerance band

use serde::{Deserialize, Serialize};

use crate::history::entry::CycleEntry;

/// Direction recent cycle lengths are moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleTrend {
    /// Recent cycles are getting longer
    Lengthening,
    /// Recent cycles are getting shorter
    Shortening,
    /// Differences stay inside the stable band
    Stable,
    /// Fewer than two derived lengths to compare
    NoData,
}

/// Aggregate statistics over the history log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleStatsSummary {
    /// Total log entries, including ones without a derived length
    pub total_entries: usize,
    /// Entries carrying a derived cycle length
    pub with_length: usize,
    /// Rolling average over the most recent lengths, 1 decimal place
    pub average_length: Option<f64>,
    /// Trend over the most recent lengths
    pub trend: CycleTrend,
}

/// Analyzer for cycle length patterns
#[derive(Debug, Clone)]
pub struct CycleStatsAnalyzer {
    /// How many of the most recent lengths feed the rolling average
    pub average_window: usize,
    /// Difference in days below which the trend reads as stable
    pub stable_band_days: f64,
}

impl Default for CycleStatsAnalyzer {
    fn default() -> Self {
        Self {
            average_window: 4,
            stable_band_days: 1.0,
        }
    }
}

impl CycleStatsAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new analyzer with custom settings
    pub fn with_settings(average_window: usize, stable_band_days: f64) -> Self {
        Self {
            average_window,
            stable_band_days,
        }
    }

    /// Rolling average of derived cycle lengths, rounded to 1 decimal.
    ///
    /// `entries` is the log in its natural newest-first order; only the
    /// most recent `average_window` derived lengths count. `None` when
    /// no entry has a derived length yet.
    pub fn average_length(&self, entries: &[CycleEntry]) -> Option<f64> {
        let lengths: Vec<f64> = entries
            .iter()
            .filter_map(|entry| entry.cycle_length)
            .take(self.average_window)
            .map(f64::from)
            .collect();
        if lengths.is_empty() {
            return None;
        }
        let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }

    /// Trend over the up-to-three most recent derived lengths.
    ///
    /// Two lengths compare directly; three compare the newer pair's
    /// average against the older pair's. A difference smaller than
    /// `stable_band_days` reads as stable.
    pub fn trend(&self, entries: &[CycleEntry]) -> CycleTrend {
        let lengths: Vec<f64> = entries
            .iter()
            .filter_map(|entry| entry.cycle_length)
            .take(3)
            .map(f64::from)
            .collect();

        let diff = match lengths.as_slice() {
            [newest, older] => newest - older,
            [newest, middle, oldest] => (newest + middle) / 2.0 - (middle + oldest) / 2.0,
            _ => return CycleTrend::NoData,
        };

        if diff.abs() < self.stable_band_days {
            CycleTrend::Stable
        } else if diff > 0.0 {
            CycleTrend::Lengthening
        } else {
            CycleTrend::Shortening
        }
    }

    /// Full summary: counts, rolling average, and trend
    pub fn summarize(&self, entries: &[CycleEntry]) -> CycleStatsSummary {
        CycleStatsSummary {
            total_entries: entries.len(),
            with_length: entries
                .iter()
                .filter(|entry| entry.cycle_length.is_some())
                .count(),
            average_length: self.average_length(entries),
            trend: self.trend(entries),
        }
    }
}
