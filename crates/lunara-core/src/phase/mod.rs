//! Phase module for Lunara
//!
//! This module classifies a calendar date into a cycle phase, exposes
//! the clipped per-phase day windows, and carries the static display
//! metadata (names, colors, hormone levels) for each phase.

mod calculator;
mod profile;

pub use calculator::{
    compute_phase, days_since_start, next_cycle_start, phase_windows, CyclePhase, PhaseWindow,
    MANIFESTATION_END, POWER_PHASE_1_END, POWER_PHASE_2_END,
};

pub use profile::{HormoneLevel, Hormones, Phase, PhaseProfile};
