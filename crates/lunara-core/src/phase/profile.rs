//! Static display metadata for the four cycle phases.

use serde::{Deserialize, Serialize};

/// The four named sub-ranges of a cycle.
///
/// Ordering follows the cycle itself: `PowerPhase1` opens it and
/// `Nurture` runs to the final day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    PowerPhase1,
    Manifestation,
    PowerPhase2,
    Nurture,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Phase; 4] = [
        Phase::PowerPhase1,
        Phase::Manifestation,
        Phase::PowerPhase2,
        Phase::Nurture,
    ];

    /// Display metadata for this phase.
    pub fn profile(self) -> &'static PhaseProfile {
        match self {
            Phase::PowerPhase1 => &POWER_PHASE_1_PROFILE,
            Phase::Manifestation => &MANIFESTATION_PROFILE,
            Phase::PowerPhase2 => &POWER_PHASE_2_PROFILE,
            Phase::Nurture => &NURTURE_PROFILE,
        }
    }
}

/// Qualitative hormone level used in phase metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HormoneLevel {
    Low,
    Rising,
    Moderate,
    Dropping,
    Peak,
    Surge,
}

/// Hormone picture for one phase.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hormones {
    pub estrogen: HormoneLevel,
    pub progesterone: HormoneLevel,
    pub testosterone: HormoneLevel,
}

/// Presentational metadata for a phase: what a front-end needs to
/// render a phase card without any further lookup.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseProfile {
    pub phase: Phase,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub hormones: Hormones,
}

static POWER_PHASE_1_PROFILE: PhaseProfile = PhaseProfile {
    phase: Phase::PowerPhase1,
    name: "Power Phase 1",
    description: "Estrogen Rising",
    color: "#B0E0E6",
    icon: "\u{26a1}",
    hormones: Hormones {
        estrogen: HormoneLevel::Rising,
        progesterone: HormoneLevel::Low,
        testosterone: HormoneLevel::Low,
    },
};

static MANIFESTATION_PROFILE: PhaseProfile = PhaseProfile {
    phase: Phase::Manifestation,
    name: "Manifestation Phase",
    description: "Peak Performance",
    color: "#F4D03F",
    icon: "\u{2728}",
    hormones: Hormones {
        estrogen: HormoneLevel::Peak,
        progesterone: HormoneLevel::Rising,
        testosterone: HormoneLevel::Surge,
    },
};

static POWER_PHASE_2_PROFILE: PhaseProfile = PhaseProfile {
    phase: Phase::PowerPhase2,
    name: "Power Phase 2",
    description: "Focused Energy",
    color: "#98D8C8",
    icon: "\u{1f3af}",
    hormones: Hormones {
        estrogen: HormoneLevel::Dropping,
        progesterone: HormoneLevel::Rising,
        testosterone: HormoneLevel::Moderate,
    },
};

static NURTURE_PROFILE: PhaseProfile = PhaseProfile {
    phase: Phase::Nurture,
    name: "Nurture Phase",
    description: "Rest & Rejuvenation",
    color: "#FFB6C1",
    icon: "\u{1f319}",
    hormones: Hormones {
        estrogen: HormoneLevel::Low,
        progesterone: HormoneLevel::Peak,
        testosterone: HormoneLevel::Low,
    },
};
