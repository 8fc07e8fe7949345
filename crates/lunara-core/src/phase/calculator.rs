//! Cycle day arithmetic and phase classification.
//!
//! Day-in-cycle is a floor-mod projection of the distance between an
//! anchor date and "today" onto `[1, cycle_length]`, so dates before
//! the anchor still land on a valid day instead of underflowing. Phase
//! boundaries come from a fixed nominal table clipped to the cycle
//! length; windows that start beyond the cycle's last day disappear
//! entirely for short cycles.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::error::ValidationError;
use crate::phase::profile::{Phase, PhaseProfile};

/// Last day of Power Phase 1 in the nominal window table.
pub const POWER_PHASE_1_END: u32 = 10;
/// Last day of the Manifestation phase.
pub const MANIFESTATION_END: u32 = 15;
/// Last day of Power Phase 2; Nurture runs from here to the cycle end.
pub const POWER_PHASE_2_END: u32 = 19;

/// Nominal `[start, end]` days for a phase before clipping.
/// Nurture's end stands in for "last day of the cycle".
const fn nominal_bounds(phase: Phase) -> (u32, u32) {
    match phase {
        Phase::PowerPhase1 => (1, POWER_PHASE_1_END),
        Phase::Manifestation => (POWER_PHASE_1_END + 1, MANIFESTATION_END),
        Phase::PowerPhase2 => (MANIFESTATION_END + 1, POWER_PHASE_2_END),
        Phase::Nurture => (POWER_PHASE_2_END + 1, u32::MAX),
    }
}

/// One contiguous run of days belonging to a single phase, already
/// clipped to the cycle length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseWindow {
    pub phase: Phase,
    /// First day of the window (1-based, inclusive).
    pub start_day: u32,
    /// Last day of the window (inclusive).
    pub end_day: u32,
}

impl PhaseWindow {
    /// Number of days the window spans.
    pub fn days(&self) -> u32 {
        self.end_day - self.start_day + 1
    }

    /// Whether `day` falls inside this window.
    pub fn contains(&self, day: u32) -> bool {
        day >= self.start_day && day <= self.end_day
    }
}

/// Where "today" sits inside the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CyclePhase {
    /// 1-based day within the cycle, always in `[1, cycle_length]`.
    pub day_in_cycle: u32,
    pub phase: Phase,
    /// Total days the active phase spans in this cycle.
    pub days_in_phase: u32,
}

impl CyclePhase {
    /// Display metadata for the active phase.
    pub fn profile(&self) -> &'static PhaseProfile {
        self.phase.profile()
    }
}

/// Classifies `today` within the cycle anchored at `reference_start`.
///
/// A missing reference date is the normal "nothing tracked yet" state
/// and yields `Ok(None)`. A `cycle_length` of zero cannot anchor the
/// modulus and is rejected. Any other length, even outside the
/// conventional 21-35 day band, produces a consistent result: the day
/// is the floor-mod of the signed day distance, so reference dates in
/// the future wrap backwards onto late cycle days instead of failing.
pub fn compute_phase(
    reference_start: Option<NaiveDate>,
    cycle_length: u32,
    today: NaiveDate,
) -> Result<Option<CyclePhase>, ValidationError> {
    let Some(reference) = reference_start else {
        return Ok(None);
    };
    if cycle_length == 0 {
        return Err(ValidationError::InvalidCycleLength { value: 0 });
    }

    let days_since = (today - reference).num_days();
    let day_in_cycle = days_since.rem_euclid(i64::from(cycle_length)) as u32 + 1;

    let phase = if day_in_cycle <= POWER_PHASE_1_END {
        Phase::PowerPhase1
    } else if day_in_cycle <= MANIFESTATION_END {
        Phase::Manifestation
    } else if day_in_cycle <= POWER_PHASE_2_END {
        Phase::PowerPhase2
    } else {
        Phase::Nurture
    };

    let (start, end) = nominal_bounds(phase);
    let days_in_phase = end.min(cycle_length) - start + 1;

    Ok(Some(CyclePhase {
        day_in_cycle,
        phase,
        days_in_phase,
    }))
}

/// The ordered phase windows for a cycle of `cycle_length` days.
///
/// Windows partition `[1, cycle_length]`: contiguous, non-overlapping,
/// and exhaustive. Short cycles clip the last surviving window and drop
/// any window that would start past the final day.
pub fn phase_windows(cycle_length: u32) -> Result<Vec<PhaseWindow>, ValidationError> {
    if cycle_length == 0 {
        return Err(ValidationError::InvalidCycleLength { value: 0 });
    }
    let windows = Phase::ALL
        .into_iter()
        .filter_map(|phase| {
            let (start, end) = nominal_bounds(phase);
            (start <= cycle_length).then_some(PhaseWindow {
                phase,
                start_day: start,
                end_day: end.min(cycle_length),
            })
        })
        .collect();
    Ok(windows)
}

/// 1-based count of days since the reference start, not wrapped.
/// Exceeds the cycle length once the next cycle is overdue and is zero
/// or negative while the reference still lies in the future.
pub fn days_since_start(reference: NaiveDate, today: NaiveDate) -> i64 {
    (today - reference).num_days() + 1
}

/// Predicted start of the next cycle.
pub fn next_cycle_start(reference: NaiveDate, cycle_length: u32) -> NaiveDate {
    reference + Duration::days(i64::from(cycle_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn phase_on(day_offset: i64) -> CyclePhase {
        let reference = d(2024, 1, 1);
        let today = reference + Duration::days(day_offset);
        compute_phase(Some(reference), 28, today).unwrap().unwrap()
    }

    #[test]
    fn test_no_reference_is_not_an_error() {
        assert_eq!(compute_phase(None, 28, d(2024, 6, 1)).unwrap(), None);
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = compute_phase(Some(d(2024, 1, 1)), 0, d(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCycleLength { value: 0 }));
        assert!(phase_windows(0).is_err());
    }

    #[test]
    fn test_first_day_of_cycle() {
        let cp = phase_on(0);
        assert_eq!(cp.day_in_cycle, 1);
        assert_eq!(cp.phase, Phase::PowerPhase1);
        assert_eq!(cp.days_in_phase, 10);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(phase_on(9).phase, Phase::PowerPhase1); // day 10
        assert_eq!(phase_on(10).phase, Phase::Manifestation); // day 11
        assert_eq!(phase_on(14).phase, Phase::Manifestation); // day 15
        assert_eq!(phase_on(15).phase, Phase::PowerPhase2); // day 16
        assert_eq!(phase_on(18).phase, Phase::PowerPhase2); // day 19
        assert_eq!(phase_on(19).phase, Phase::Nurture); // day 20
        assert_eq!(phase_on(27).phase, Phase::Nurture); // day 28
    }

    #[test]
    fn test_days_in_phase_per_phase() {
        assert_eq!(phase_on(0).days_in_phase, 10);
        assert_eq!(phase_on(12).days_in_phase, 5);
        assert_eq!(phase_on(17).days_in_phase, 4);
        assert_eq!(phase_on(22).days_in_phase, 9); // 28 - 19
    }

    #[test]
    fn test_wraps_into_next_cycle() {
        // 35 days after the anchor is day 8 of the second cycle.
        let cp = phase_on(35);
        assert_eq!(cp.day_in_cycle, 8);
        assert_eq!(cp.phase, Phase::PowerPhase1);
    }

    #[test]
    fn test_future_reference_wraps_backwards() {
        // The day before the anchor is the last day of the previous cycle.
        let cp = phase_on(-1);
        assert_eq!(cp.day_in_cycle, 28);
        assert_eq!(cp.phase, Phase::Nurture);

        let cp = phase_on(-28);
        assert_eq!(cp.day_in_cycle, 1);
    }

    #[test]
    fn test_short_cycle_clips_active_phase() {
        // Day 12 of a 12-day cycle: Manifestation survives but only
        // spans days 11-12.
        let reference = d(2024, 1, 1);
        let cp = compute_phase(Some(reference), 12, d(2024, 1, 12))
            .unwrap()
            .unwrap();
        assert_eq!(cp.day_in_cycle, 12);
        assert_eq!(cp.phase, Phase::Manifestation);
        assert_eq!(cp.days_in_phase, 2);
    }

    #[test]
    fn test_single_day_cycle() {
        let reference = d(2024, 1, 1);
        for offset in [-3, 0, 5] {
            let cp = compute_phase(Some(reference), 1, reference + Duration::days(offset))
                .unwrap()
                .unwrap();
            assert_eq!(cp.day_in_cycle, 1);
            assert_eq!(cp.phase, Phase::PowerPhase1);
            assert_eq!(cp.days_in_phase, 1);
        }
    }

    #[test]
    fn test_windows_for_standard_cycle() {
        let windows = phase_windows(28).unwrap();
        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0], PhaseWindow { phase: Phase::PowerPhase1, start_day: 1, end_day: 10 });
        assert_eq!(windows[1], PhaseWindow { phase: Phase::Manifestation, start_day: 11, end_day: 15 });
        assert_eq!(windows[2], PhaseWindow { phase: Phase::PowerPhase2, start_day: 16, end_day: 19 });
        assert_eq!(windows[3], PhaseWindow { phase: Phase::Nurture, start_day: 20, end_day: 28 });
        assert_eq!(windows[3].days(), 9);
    }

    #[test]
    fn test_windows_drop_for_short_cycles() {
        let windows = phase_windows(15).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].phase, Phase::Manifestation);
        assert_eq!(windows[1].end_day, 15);

        let windows = phase_windows(19).unwrap();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2].phase, Phase::PowerPhase2);

        let windows = phase_windows(5).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], PhaseWindow { phase: Phase::PowerPhase1, start_day: 1, end_day: 5 });
    }

    #[test]
    fn test_day_count_is_unwrapped() {
        let reference = d(2024, 1, 1);
        assert_eq!(days_since_start(reference, reference), 1);
        assert_eq!(days_since_start(reference, d(2024, 1, 28)), 28);
        assert_eq!(days_since_start(reference, d(2024, 2, 5)), 36);
        assert_eq!(days_since_start(reference, d(2023, 12, 31)), 0);
    }

    #[test]
    fn test_next_cycle_start() {
        assert_eq!(next_cycle_start(d(2024, 1, 1), 28), d(2024, 1, 29));
        assert_eq!(next_cycle_start(d(2024, 2, 15), 30), d(2024, 3, 16));
    }
}
