//! Per-phase guidance commands.
//!
//! Each command resolves the phase for today (or `--date`) from the
//! stored settings and prints the matching guidance table. An
//! untracked state prints `null` rather than failing; there is simply
//! nothing to say yet.

use chrono::NaiveDate;
use clap::Subcommand;
use lunara_core::guidance::{
    activity_guide, fertility_outlook, partner_guide, support_mode, workout_outlook, PartnerGuide,
    SupportGuide,
};
use lunara_core::storage::settings;
use lunara_core::{compute_phase, Config, CyclePhase, Phase, SqliteStore};
use serde::Serialize;

#[derive(Subcommand)]
pub enum GuidanceAction {
    /// Activity levels for work, exercise, social life, and intimacy
    Activities {
        /// Evaluate this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Fertility and contraception outlook
    Fertility {
        /// Evaluate this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Partner support guidance
    Partner {
        /// Evaluate this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Workout planning for the phase
    Workout {
        /// Evaluate this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct PartnerView {
    phase: Phase,
    day_in_cycle: u32,
    support: &'static SupportGuide,
    card: &'static PartnerGuide,
}

/// The phase at `date` (today when absent) plus the cycle length it
/// was computed with. `None` while nothing is tracked.
fn current_cycle(date: Option<NaiveDate>) -> Result<Option<(CyclePhase, u32)>, Box<dyn std::error::Error>> {
    let kv = SqliteStore::open()?;
    let config = Config::load_or_default();
    let reference = settings::reference_start(&kv)?;
    let length = settings::cycle_length(&kv, config.cycle.default_length)?;
    let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    Ok(compute_phase(reference, length, today)?.map(|cycle| (cycle, length)))
}

pub fn run(action: GuidanceAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GuidanceAction::Activities { date } => match current_cycle(date)? {
            Some((cycle, _)) => {
                println!("{}", serde_json::to_string_pretty(activity_guide(cycle.phase))?);
            }
            None => println!("null"),
        },
        GuidanceAction::Fertility { date } => match current_cycle(date)? {
            Some((cycle, _)) => {
                println!("{}", serde_json::to_string_pretty(fertility_outlook(cycle.phase))?);
            }
            None => println!("null"),
        },
        GuidanceAction::Partner { date } => match current_cycle(date)? {
            Some((cycle, length)) => {
                let mode = support_mode(cycle.phase, cycle.day_in_cycle, length);
                let view = PartnerView {
                    phase: cycle.phase,
                    day_in_cycle: cycle.day_in_cycle,
                    support: mode.guide(),
                    card: partner_guide(cycle.phase),
                };
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
            None => println!("null"),
        },
        GuidanceAction::Workout { date } => match current_cycle(date)? {
            Some((cycle, _)) => {
                println!("{}", serde_json::to_string_pretty(workout_outlook(cycle.phase))?);
            }
            None => println!("null"),
        },
    }
    Ok(())
}
