//! Partner guidance per phase.
//!
//! Two layers: per-phase communication tips (approach, do and avoid
//! lists), and a blunt day-sensitive "support mode" card. The mode is
//! the only guidance that looks at the day within the phase: the last
//! two days before an expected period escalate Nurture to critical.

use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Communication guidance for one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerGuide {
    pub phase: Phase,
    pub approach: &'static str,
    pub description: &'static str,
    #[serde(rename = "do")]
    pub dos: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

/// Communication guidance for `phase`.
pub fn partner_guide(phase: Phase) -> &'static PartnerGuide {
    match phase {
        Phase::PowerPhase1 => &POWER_PHASE_1_GUIDE,
        Phase::Manifestation => &MANIFESTATION_GUIDE,
        Phase::PowerPhase2 => &POWER_PHASE_2_GUIDE,
        Phase::Nurture => &NURTURE_GUIDE,
    }
}

/// Day-sensitive support posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportMode {
    /// Last days of Nurture, right before the expected period
    CriticalCare,
    /// The rest of Nurture
    ExtremeCaution,
    /// Manifestation
    Superhero,
    /// Power Phase 1
    Building,
    /// Power Phase 2
    Focus,
}

impl SupportMode {
    /// The survival card for this mode.
    pub fn guide(self) -> &'static SupportGuide {
        match self {
            SupportMode::CriticalCare => &CRITICAL_CARE_GUIDE,
            SupportMode::ExtremeCaution => &EXTREME_CAUTION_GUIDE,
            SupportMode::Superhero => &SUPERHERO_GUIDE,
            SupportMode::Building => &BUILDING_GUIDE,
            SupportMode::Focus => &FOCUS_GUIDE,
        }
    }

    pub fn headline(self) -> &'static str {
        self.guide().headline
    }
}

/// Survival card shown for a support mode.
#[derive(Debug, Clone, Serialize)]
pub struct SupportGuide {
    pub mode: SupportMode,
    pub headline: &'static str,
    #[serde(rename = "do")]
    pub dos: &'static [&'static str],
    #[serde(rename = "dont")]
    pub donts: &'static [&'static str],
}

/// Support mode for a given position in the cycle.
///
/// Nurture escalates to critical care once `day_in_cycle` reaches the
/// last two days of the cycle.
pub fn support_mode(phase: Phase, day_in_cycle: u32, cycle_length: u32) -> SupportMode {
    match phase {
        Phase::Nurture if day_in_cycle >= cycle_length.saturating_sub(2) => {
            SupportMode::CriticalCare
        }
        Phase::Nurture => SupportMode::ExtremeCaution,
        Phase::Manifestation => SupportMode::Superhero,
        Phase::PowerPhase1 => SupportMode::Building,
        Phase::PowerPhase2 => SupportMode::Focus,
    }
}

static POWER_PHASE_1_GUIDE: PartnerGuide = PartnerGuide {
    phase: Phase::PowerPhase1,
    approach: "Supportive and encouraging",
    description: "She's building energy and confidence. Great time for collaborative planning and starting new projects together.",
    dos: &[
        "Encourage her ideas",
        "Plan activities together",
        "Be supportive of new initiatives",
        "Engage in meaningful conversations",
    ],
    avoid: &[
        "Being dismissive",
        "Rushing decisions",
        "Overwhelming with too many tasks",
    ],
};

static MANIFESTATION_GUIDE: PartnerGuide = PartnerGuide {
    phase: Phase::Manifestation,
    approach: "Empower and celebrate",
    description: "She's at her peak! This is her time to shine. Support her in high-stakes situations and celebrate her confidence.",
    dos: &[
        "Encourage her to take on challenges",
        "Support important presentations/meetings",
        "Celebrate her achievements",
        "Enjoy social activities together",
        "Be intimate and connected",
    ],
    avoid: &[
        "Undermining her confidence",
        "Scheduling conflicts during this time",
        "Being dismissive of her ideas",
    ],
};

static POWER_PHASE_2_GUIDE: PartnerGuide = PartnerGuide {
    phase: Phase::PowerPhase2,
    approach: "Respectful and focused",
    description: "She has excellent focus and endurance. Great time for deep work and completing projects together.",
    dos: &[
        "Respect her need for focus",
        "Support her in completing tasks",
        "Have meaningful one-on-one conversations",
        "Be patient and understanding",
    ],
    avoid: &[
        "Interrupting her flow",
        "Demanding immediate attention",
        "Being overly social",
    ],
};

static NURTURE_GUIDE: PartnerGuide = PartnerGuide {
    phase: Phase::Nurture,
    approach: "Gentle and understanding",
    description: "She needs rest and self-care. This is a time for patience, understanding, and emotional support.",
    dos: &[
        "Offer emotional support",
        "Be patient and understanding",
        "Help with practical tasks",
        "Create a calm environment",
        "Respect her need for space",
    ],
    avoid: &[
        "Pushing for high-energy activities",
        "Being critical or demanding",
        "Expecting peak performance",
        "Minimizing her feelings",
    ],
};

static CRITICAL_CARE_GUIDE: SupportGuide = SupportGuide {
    mode: SupportMode::CriticalCare,
    headline: "PLAY DEAD",
    dos: &[
        "Be quiet (like, really quiet)",
        "Bring chocolate (the good kind)",
        "Offer back rubs (without asking)",
        "Say \"yes\" to everything (seriously, everything)",
    ],
    donts: &[
        "Ask \"what's wrong?\" (you'll regret it)",
        "Make jokes (not the time, bro)",
        "Suggest going out (she wants to stay in)",
        "Be logical (logic doesn't work here)",
    ],
};

static EXTREME_CAUTION_GUIDE: SupportGuide = SupportGuide {
    mode: SupportMode::ExtremeCaution,
    headline: "PROCEED WITH EXTREME CAUTION",
    dos: &[
        "Be gentle (like handling glass)",
        "Listen actively (actually listen)",
        "Offer help (but don't hover)",
        "Be patient (very, very patient)",
    ],
    donts: &[
        "Be critical (save it for later)",
        "Rush her (she moves at her own pace)",
        "Make demands (just don't)",
        "Minimize feelings (they're real, deal with it)",
    ],
};

static SUPERHERO_GUIDE: SupportGuide = SupportGuide {
    mode: SupportMode::Superhero,
    headline: "SHE'S A SUPERHERO",
    dos: &[
        "Celebrate her (she's amazing right now)",
        "Support her goals (she can do anything)",
        "Enjoy the energy (it's contagious)",
        "Be intimate (trust us on this one)",
    ],
    donts: &[
        "Hold her back (she's unstoppable)",
        "Be jealous (of her confidence)",
        "Undermine confidence (she's at peak)",
        "Waste this time (it's limited)",
    ],
};

static BUILDING_GUIDE: SupportGuide = SupportGuide {
    mode: SupportMode::Building,
    headline: "BUILDING MODE",
    dos: &[
        "Encourage her (she's gaining momentum)",
        "Plan together (she's thinking ahead)",
        "Be supportive (she needs it)",
        "Engage in conversations (she's getting sharper)",
    ],
    donts: &[
        "Be dismissive (her ideas matter)",
        "Rush decisions (let her think)",
        "Overwhelm her (energy is building)",
        "Ignore her ideas (they're getting better)",
    ],
};

static FOCUS_GUIDE: SupportGuide = SupportGuide {
    mode: SupportMode::Focus,
    headline: "FOCUS MODE",
    dos: &[
        "Respect her focus (she's in the zone)",
        "Support her work (she's getting things done)",
        "Be understanding (she's introspective)",
        "Have deep conversations (she's ready)",
    ],
    donts: &[
        "Interrupt her (she's concentrating)",
        "Demand attention (she's focused)",
        "Be overly social (she prefers depth)",
        "Distract her (let her work)",
    ],
};
