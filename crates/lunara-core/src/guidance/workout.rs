//! Workout planning per phase.
//!
//! A training-focused view of the cycle: expected performance, the
//! session types worth scheduling, and what to skip. Performance
//! levels reuse the activity scale; each level's badge color in the
//! companion UI matches the color of the phase it belongs to.

use indoc::indoc;
use serde::Serialize;

use crate::guidance::recommendations::ActivityLevel;
use crate::phase::Phase;

/// One recommended session type.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlan {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub intensity: &'static str,
    pub duration: &'static str,
    pub frequency: &'static str,
    pub focus: &'static str,
    pub exercises: &'static [&'static str],
    pub why: &'static str,
}

/// Training outlook for one phase.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutOutlook {
    pub phase: Phase,
    pub performance_level: ActivityLevel,
    pub overview: &'static str,
    pub energy: &'static str,
    pub strength: &'static str,
    pub endurance: &'static str,
    pub recovery: &'static str,
    pub injury_risk: &'static str,
    pub workouts: &'static [WorkoutPlan],
    pub tips: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

/// Workout outlook for `phase`.
pub fn workout_outlook(phase: Phase) -> &'static WorkoutOutlook {
    match phase {
        Phase::PowerPhase1 => &POWER_PHASE_1_WORKOUTS,
        Phase::Manifestation => &MANIFESTATION_WORKOUTS,
        Phase::PowerPhase2 => &POWER_PHASE_2_WORKOUTS,
        Phase::Nurture => &NURTURE_WORKOUTS,
    }
}

static POWER_PHASE_1_WORKOUTS: WorkoutOutlook = WorkoutOutlook {
    phase: Phase::PowerPhase1,
    performance_level: ActivityLevel::High,
    overview: indoc! {"
        Energy is building as estrogen rises. Strength work lands well
        and recovery is quick, so this is the phase to add load and
        build momentum toward the mid-cycle peak."},
    energy: "Rising",
    strength: "Building",
    endurance: "Good",
    recovery: "Fast",
    injury_risk: "Low",
    workouts: &[
        WorkoutPlan {
            kind: "Strength Training",
            intensity: "Moderate to heavy",
            duration: "45-60 min",
            frequency: "3-4x this phase",
            focus: "Progressive overload on compound lifts",
            exercises: &["Squats", "Deadlifts", "Bench press", "Rows"],
            why: "Rising estrogen supports muscle building and quick recovery between sets.",
        },
        WorkoutPlan {
            kind: "Cardio Intervals",
            intensity: "Moderate-high",
            duration: "30-40 min",
            frequency: "1-2x this phase",
            focus: "Work capacity without draining strength sessions",
            exercises: &["Bike intervals", "Rowing", "Incline treadmill"],
            why: "Improving energy makes interval work productive without the burnout risk of later phases.",
        },
        WorkoutPlan {
            kind: "Yoga / Pilates",
            intensity: "Light-moderate",
            duration: "30-45 min",
            frequency: "1-2x this phase",
            focus: "Mobility and core control alongside the lifting",
            exercises: &["Vinyasa flow", "Mat pilates", "Hip mobility work"],
            why: "Keeps joints moving well while training volume ramps up.",
        },
    ],
    tips: &[
        "Add weight or reps each session; the phase rewards progression",
        "Schedule the hardest sessions toward the end of the phase",
        "Eat enough protein to back the building window",
    ],
    avoid: &[
        "Jumping straight to maximal loads on day one",
        "Ignoring lingering fatigue from the first couple of days",
    ],
};

static MANIFESTATION_WORKOUTS: WorkoutOutlook = WorkoutOutlook {
    phase: Phase::Manifestation,
    performance_level: ActivityLevel::Peak,
    overview: indoc! {"
        Peak estrogen and a testosterone surge put strength, speed, and
        confidence at their highest of the whole cycle. Anything worth
        testing belongs in these few days."},
    energy: "Peak",
    strength: "Peak",
    endurance: "High",
    recovery: "Very fast",
    injury_risk: "Low",
    workouts: &[
        WorkoutPlan {
            kind: "High-Intensity Training",
            intensity: "Maximal",
            duration: "45-75 min",
            frequency: "2-3x this phase",
            focus: "PR attempts and top-end strength",
            exercises: &["1RM lifts", "Sprints", "Olympic lifts", "Plyometrics"],
            why: "Peak hormones mean peak force output; this is the window for personal records.",
        },
        WorkoutPlan {
            kind: "Competition / Race",
            intensity: "Maximal",
            duration: "Event length",
            frequency: "If scheduled",
            focus: "Performing when it counts",
            exercises: &["Races", "Meets", "Matches"],
            why: "Confidence and physical output both peak; hard events land best here.",
        },
        WorkoutPlan {
            kind: "HIIT Circuits",
            intensity: "High",
            duration: "20-30 min",
            frequency: "1-2x this phase",
            focus: "Short, sharp conditioning",
            exercises: &["Burpee circuits", "Kettlebell complexes", "Sprint intervals"],
            why: "Fast recovery lets dense circuits do their work without wrecking the next session.",
        },
    ],
    tips: &[
        "Plan PR attempts and competitions into these days ahead of time",
        "Push hard; the recovery to back it up is there",
        "Warm up properly even when everything feels easy",
    ],
    avoid: &[
        "Wasting the window on easy maintenance sessions",
        "Skipping warm-ups because everything feels effortless",
    ],
};

static POWER_PHASE_2_WORKOUTS: WorkoutOutlook = WorkoutOutlook {
    phase: Phase::PowerPhase2,
    performance_level: ActivityLevel::ModerateHigh,
    overview: indoc! {"
        Estrogen drops while progesterone rises; top-end power eases off
        but endurance and focus hold steady. Consistency beats intensity
        in this phase."},
    energy: "Steady",
    strength: "Moderate",
    endurance: "Peak",
    recovery: "Moderate",
    injury_risk: "Low",
    workouts: &[
        WorkoutPlan {
            kind: "Steady-State Cardio",
            intensity: "Moderate",
            duration: "40-60 min",
            frequency: "2-3x this phase",
            focus: "Aerobic base at a conversational pace",
            exercises: &["Zone-2 runs", "Cycling", "Swimming"],
            why: "Endurance holds up well here while explosive output tapers.",
        },
        WorkoutPlan {
            kind: "Moderate Strength",
            intensity: "Moderate",
            duration: "40-50 min",
            frequency: "2x this phase",
            focus: "Volume work at submaximal loads",
            exercises: &["3x8-12 compound lifts", "Accessory work", "Tempo sets"],
            why: "Submaximal volume maintains strength without fighting the hormone curve.",
        },
    ],
    tips: &[
        "Hold a steady schedule; this phase rewards showing up",
        "Fuel longer sessions, progesterone raises energy burn",
        "Use the focus for technique work",
    ],
    avoid: &[
        "Chasing PRs the body is no longer primed for",
        "Stacking high-intensity days back to back",
    ],
};

static NURTURE_WORKOUTS: WorkoutOutlook = WorkoutOutlook {
    phase: Phase::Nurture,
    performance_level: ActivityLevel::LowModerate,
    overview: indoc! {"
        Progesterone dominates and energy runs low ahead of the next
        period. Movement still helps, but its job now is recovery, not
        adaptation."},
    energy: "Low",
    strength: "Reduced",
    endurance: "Low",
    recovery: "Slow",
    injury_risk: "Elevated",
    workouts: &[
        WorkoutPlan {
            kind: "Gentle Yoga",
            intensity: "Light",
            duration: "20-40 min",
            frequency: "2-3x this phase",
            focus: "Restorative movement and breath work",
            exercises: &["Yin yoga", "Restorative poses", "Breathing practice"],
            why: "Calms the nervous system when energy and mood dip.",
        },
        WorkoutPlan {
            kind: "Walking",
            intensity: "Light",
            duration: "20-45 min",
            frequency: "Daily if it feels good",
            focus: "Easy movement and daylight",
            exercises: &["Outdoor walks", "Easy hikes"],
            why: "Keeps circulation going and helps with cramps without taxing recovery.",
        },
        WorkoutPlan {
            kind: "Stretching & Mobility",
            intensity: "Light",
            duration: "15-30 min",
            frequency: "2-3x this phase",
            focus: "Maintaining range of motion",
            exercises: &["Full-body stretching", "Foam rolling", "Hip openers"],
            why: "Low-cost work that leaves the body ready for the next building phase.",
        },
    ],
    tips: &[
        "Treat sessions as recovery; shorter and lighter is the point",
        "Prioritize sleep over extra training",
        "Cut volume rather than stopping entirely",
    ],
    avoid: &[
        "PR attempts and high-impact work",
        "Punishing a missed session",
        "Comparing output to the peak window",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_a_complete_outlook() {
        for phase in Phase::ALL {
            let outlook = workout_outlook(phase);
            assert_eq!(outlook.phase, phase);
            assert!(!outlook.overview.is_empty());
            assert!(!outlook.workouts.is_empty());
            assert!(!outlook.tips.is_empty());
            assert!(!outlook.avoid.is_empty());
            for plan in outlook.workouts {
                assert!(!plan.exercises.is_empty());
                assert!(!plan.why.is_empty());
            }
        }
    }

    #[test]
    fn performance_levels_follow_the_cycle() {
        assert_eq!(
            workout_outlook(Phase::Manifestation).performance_level,
            ActivityLevel::Peak
        );
        assert_eq!(
            workout_outlook(Phase::PowerPhase1).performance_level,
            ActivityLevel::High
        );
        assert_eq!(
            workout_outlook(Phase::PowerPhase2).performance_level,
            ActivityLevel::ModerateHigh
        );
        assert_eq!(
            workout_outlook(Phase::Nurture).performance_level,
            ActivityLevel::LowModerate
        );
    }

    #[test]
    fn nurture_flags_recovery() {
        let outlook = workout_outlook(Phase::Nurture);
        assert_eq!(outlook.injury_risk, "Elevated");
        assert!(outlook.workouts.iter().all(|p| p.intensity == "Light"));
    }

    #[test]
    fn plan_serializes_with_type_key() {
        let json = serde_json::to_value(workout_outlook(Phase::PowerPhase1)).unwrap();
        assert_eq!(json["workouts"][0]["type"], "Strength Training");
        assert_eq!(json["performance_level"], "high");
    }
}
