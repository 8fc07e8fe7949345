//! Static per-phase guidance content.
//!
//! Four read-only tables keyed by [`Phase`](crate::phase::Phase):
//! activity levels across daily-life categories, a fertility and
//! contraception outlook, partner support material, and workout
//! planning. The text ships with the library; callers pick a table
//! and a phase and render the result.

mod fertility;
mod partner;
mod recommendations;
mod workout;

pub use fertility::{fertility_outlook, FertilityLevel, FertilityOutlook, FertilitySection};
pub use partner::{partner_guide, support_mode, PartnerGuide, SupportGuide, SupportMode};
pub use recommendations::{activity_guide, ActivityGuide, ActivityLevel, CategoryGuide};
pub use workout::{workout_outlook, WorkoutOutlook, WorkoutPlan};
