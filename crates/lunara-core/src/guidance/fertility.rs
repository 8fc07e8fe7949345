//! Fertility and libido outlook per phase.
//!
//! Three sections per phase (libido, fertility, contraception), each a
//! level plus advisory text. Informational only; nothing here is
//! medical advice and the contraception notes say so in every phase.

use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Qualitative level used across the fertility sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FertilityLevel {
    Peak,
    ModerateHigh,
    Moderate,
    Low,
    VeryLow,
    Safer,
    HighRisk,
}

/// One advisory section of the outlook.
#[derive(Debug, Clone, Serialize)]
pub struct FertilitySection {
    pub level: FertilityLevel,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_days: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregnancy_risk: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<&'static str>,
    pub note: &'static str,
}

/// Full fertility outlook for one phase.
#[derive(Debug, Clone, Serialize)]
pub struct FertilityOutlook {
    pub phase: Phase,
    pub libido: FertilitySection,
    pub fertility: FertilitySection,
    pub contraception: FertilitySection,
}

/// Fertility outlook for `phase`.
pub fn fertility_outlook(phase: Phase) -> &'static FertilityOutlook {
    match phase {
        Phase::PowerPhase1 => &POWER_PHASE_1_OUTLOOK,
        Phase::Manifestation => &MANIFESTATION_OUTLOOK,
        Phase::PowerPhase2 => &POWER_PHASE_2_OUTLOOK,
        Phase::Nurture => &NURTURE_OUTLOOK,
    }
}

static POWER_PHASE_1_OUTLOOK: FertilityOutlook = FertilityOutlook {
    phase: Phase::PowerPhase1,
    libido: FertilitySection {
        level: FertilityLevel::ModerateHigh,
        description: "Libido is increasing as estrogen rises. Good time for intimacy.",
        best_days: Some("Days 1-10"),
        pregnancy_risk: None,
        safety: None,
        note: "Desire building up as hormones increase",
    },
    fertility: FertilitySection {
        level: FertilityLevel::Low,
        description: "Low fertility period. Ovulation has not occurred yet.",
        best_days: Some("Not fertile"),
        pregnancy_risk: Some("Very Low"),
        safety: None,
        note: "Early cycle phase, ovulation typically occurs around day 14",
    },
    contraception: FertilitySection {
        level: FertilityLevel::Safer,
        description: "Lower risk period, but not completely safe. Sperm can survive up to 5 days.",
        best_days: None,
        pregnancy_risk: None,
        safety: Some("Moderate - Use protection"),
        note: "While fertility is low, always use contraception if not trying to conceive",
    },
};

static MANIFESTATION_OUTLOOK: FertilityOutlook = FertilityOutlook {
    phase: Phase::Manifestation,
    libido: FertilitySection {
        level: FertilityLevel::Peak,
        description: "PEAK LIBIDO! Testosterone surge and peak estrogen create maximum desire and arousal.",
        best_days: Some("Days 11-15"),
        pregnancy_risk: None,
        safety: None,
        note: "This is your best time for great sex - highest desire and physical response",
    },
    fertility: FertilitySection {
        level: FertilityLevel::Peak,
        description: "PEAK FERTILITY WINDOW! Ovulation typically occurs during this phase. Highest chance of conception.",
        best_days: Some("Days 11-15 (especially days 12-14)"),
        pregnancy_risk: Some("Very High"),
        safety: None,
        note: "Ovulation window - egg is released and viable for 12-24 hours. Sperm can survive 3-5 days, so conception is possible from sex 3-5 days before ovulation too.",
    },
    contraception: FertilitySection {
        level: FertilityLevel::HighRisk,
        description: "HIGHEST RISK PERIOD for pregnancy. Must use reliable contraception if not trying to conceive.",
        best_days: None,
        pregnancy_risk: None,
        safety: Some("High Risk - Use reliable protection"),
        note: "This is the most fertile window. Use condoms, birth control, or other reliable methods if avoiding pregnancy.",
    },
};

static POWER_PHASE_2_OUTLOOK: FertilityOutlook = FertilityOutlook {
    phase: Phase::PowerPhase2,
    libido: FertilitySection {
        level: FertilityLevel::Moderate,
        description: "Libido is moderate. Still good for intimacy, though energy may be more focused inward.",
        best_days: Some("Days 16-19"),
        pregnancy_risk: None,
        safety: None,
        note: "Post-ovulation, desire may be more emotionally focused",
    },
    fertility: FertilitySection {
        level: FertilityLevel::Low,
        description: "Fertility decreases after ovulation. Egg is no longer viable after 24 hours post-ovulation.",
        best_days: Some("Not fertile"),
        pregnancy_risk: Some("Low"),
        safety: None,
        note: "Ovulation has passed. Conception unlikely unless ovulation was delayed.",
    },
    contraception: FertilitySection {
        level: FertilityLevel::Safer,
        description: "Lower risk period post-ovulation, but still use protection as cycle can vary.",
        best_days: None,
        pregnancy_risk: None,
        safety: Some("Moderate - Use protection"),
        note: "While risk is lower, cycles can vary and ovulation can be delayed. Use protection if not trying to conceive.",
    },
};

static NURTURE_OUTLOOK: FertilityOutlook = FertilityOutlook {
    phase: Phase::Nurture,
    libido: FertilitySection {
        level: FertilityLevel::Low,
        description: "Libido is typically lower. Focus on emotional connection and gentle intimacy.",
        best_days: Some("Days 20-28"),
        pregnancy_risk: None,
        safety: None,
        note: "Lower desire due to progesterone dominance. Emotional intimacy may be more important.",
    },
    fertility: FertilitySection {
        level: FertilityLevel::VeryLow,
        description: "Very low fertility. Menstruation approaching. Conception extremely unlikely.",
        best_days: Some("Not fertile"),
        pregnancy_risk: Some("Very Low"),
        safety: None,
        note: "Luteal phase - if conception didn't occur, period will start soon. Very unlikely to conceive.",
    },
    contraception: FertilitySection {
        level: FertilityLevel::Safer,
        description: "Lower risk period, but still recommended to use protection as cycles can vary.",
        best_days: None,
        pregnancy_risk: None,
        safety: Some("Moderate - Use protection"),
        note: "While this is typically a safer period, always use contraception if not trying to conceive, as cycle lengths can vary.",
    },
};
