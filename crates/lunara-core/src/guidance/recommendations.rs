//! Daily activity recommendations per phase.
//!
//! Four categories (work, exercise, social, intimacy), each with a
//! qualitative level, a one-line summary, and concrete suggestions.

use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Qualitative suitability level for an activity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Peak,
    High,
    ModerateHigh,
    Good,
    Moderate,
    LowModerate,
    Low,
}

/// Guidance for a single activity category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGuide {
    pub level: ActivityLevel,
    pub description: &'static str,
    pub best_for: &'static [&'static str],
}

/// Activity guidance for one phase across all categories.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityGuide {
    pub phase: Phase,
    pub work: CategoryGuide,
    pub exercise: CategoryGuide,
    pub social: CategoryGuide,
    pub intimacy: CategoryGuide,
}

/// Activity guidance for `phase`.
pub fn activity_guide(phase: Phase) -> &'static ActivityGuide {
    match phase {
        Phase::PowerPhase1 => &POWER_PHASE_1_ACTIVITIES,
        Phase::Manifestation => &MANIFESTATION_ACTIVITIES,
        Phase::PowerPhase2 => &POWER_PHASE_2_ACTIVITIES,
        Phase::Nurture => &NURTURE_ACTIVITIES,
    }
}

static POWER_PHASE_1_ACTIVITIES: ActivityGuide = ActivityGuide {
    phase: Phase::PowerPhase1,
    work: CategoryGuide {
        level: ActivityLevel::High,
        description: "Great time for planning, organizing, and starting new projects. Your cognitive function is improving.",
        best_for: &[
            "Strategic planning",
            "Learning new skills",
            "Organizing tasks",
            "Team meetings",
        ],
    },
    exercise: CategoryGuide {
        level: ActivityLevel::ModerateHigh,
        description: "Energy is building. Good for moderate to high-intensity workouts.",
        best_for: &["Strength training", "Cardio", "Yoga", "Pilates"],
    },
    social: CategoryGuide {
        level: ActivityLevel::Good,
        description: "Mood is improving. Good time for social activities.",
        best_for: &["Casual hangouts", "Networking events", "Group activities"],
    },
    intimacy: CategoryGuide {
        level: ActivityLevel::Moderate,
        description: "Libido is increasing as estrogen rises.",
        best_for: &["Intimate conversations", "Building connection"],
    },
};

static MANIFESTATION_ACTIVITIES: ActivityGuide = ActivityGuide {
    phase: Phase::Manifestation,
    work: CategoryGuide {
        level: ActivityLevel::Peak,
        description: "PEAK PERFORMANCE! Best time for high-stakes activities. Your brain power, confidence, and verbal skills are at their highest.",
        best_for: &[
            "Important presentations",
            "Negotiations",
            "Job interviews",
            "Public speaking",
            "Creative projects",
            "Decision-making",
        ],
    },
    exercise: CategoryGuide {
        level: ActivityLevel::Peak,
        description: "Maximum energy and strength. Push hard in the gym!",
        best_for: &[
            "High-intensity training",
            "PR attempts",
            "Competitions",
            "Challenging workouts",
        ],
    },
    social: CategoryGuide {
        level: ActivityLevel::Peak,
        description: "You're at your most charismatic and confident. Perfect for social events!",
        best_for: &[
            "Important social events",
            "Dates",
            "Parties",
            "Networking",
            "Social gatherings",
        ],
    },
    intimacy: CategoryGuide {
        level: ActivityLevel::Peak,
        description: "Libido is at its peak! Testosterone surge makes this the best time for intimacy.",
        best_for: &["Intimate moments", "Deep connection", "Physical intimacy"],
    },
};

static POWER_PHASE_2_ACTIVITIES: ActivityGuide = ActivityGuide {
    phase: Phase::PowerPhase2,
    work: CategoryGuide {
        level: ActivityLevel::High,
        description: "Excellent focus and endurance. Great for detailed work and follow-through.",
        best_for: &[
            "Deep work",
            "Problem-solving",
            "Completing projects",
            "Administrative tasks",
        ],
    },
    exercise: CategoryGuide {
        level: ActivityLevel::Moderate,
        description: "Good endurance. Focus on consistency over intensity.",
        best_for: &[
            "Steady-state cardio",
            "Moderate strength training",
            "Endurance activities",
        ],
    },
    social: CategoryGuide {
        level: ActivityLevel::Moderate,
        description: "More introspective. Prefer smaller, meaningful interactions.",
        best_for: &["One-on-one conversations", "Close friends", "Quiet activities"],
    },
    intimacy: CategoryGuide {
        level: ActivityLevel::Moderate,
        description: "Intimacy is still good, though energy may be more focused inward.",
        best_for: &["Emotional connection", "Quality time"],
    },
};

static NURTURE_ACTIVITIES: ActivityGuide = ActivityGuide {
    phase: Phase::Nurture,
    work: CategoryGuide {
        level: ActivityLevel::LowModerate,
        description: "Time for rest and reflection. Focus on less demanding tasks and self-care.",
        best_for: &[
            "Reflection",
            "Planning for next cycle",
            "Gentle tasks",
            "Self-care activities",
        ],
    },
    exercise: CategoryGuide {
        level: ActivityLevel::Low,
        description: "Energy is lower. Focus on gentle movement and recovery.",
        best_for: &["Gentle yoga", "Walking", "Stretching", "Restorative activities"],
    },
    social: CategoryGuide {
        level: ActivityLevel::Low,
        description: "You may prefer solitude or very close, supportive relationships.",
        best_for: &["Quiet time", "Close support system", "Self-care", "Rest"],
    },
    intimacy: CategoryGuide {
        level: ActivityLevel::Low,
        description: "Libido is typically lower. Focus on emotional support and understanding.",
        best_for: &[
            "Emotional support",
            "Understanding",
            "Patience",
            "Gentle connection",
        ],
    },
};
