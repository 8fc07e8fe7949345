//! Cycle position commands.

use chrono::NaiveDate;
use clap::Subcommand;
use lunara_core::phase::{days_since_start, next_cycle_start, phase_windows, Hormones};
use lunara_core::storage::settings;
use lunara_core::{compute_phase, Config, Phase, SqliteStore};
use serde::Serialize;

#[derive(Subcommand)]
pub enum PhaseAction {
    /// Where a day falls in the current cycle
    Status {
        /// Evaluate this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Phase windows across one full cycle
    Overview {
        /// Use this length instead of the stored one
        #[arg(long)]
        cycle_length: Option<u32>,
    },
    /// Predicted start of the next cycle
    Next,
}

#[derive(Serialize)]
struct PhaseStatus {
    day_in_cycle: u32,
    phase: Phase,
    name: &'static str,
    description: &'static str,
    color: &'static str,
    icon: &'static str,
    hormones: Hormones,
    days_in_phase: u32,
    cycle_length: u32,
    day_count: i64,
    next_start: NaiveDate,
}

#[derive(Serialize)]
struct WindowRow {
    phase: Phase,
    name: &'static str,
    start_day: u32,
    end_day: u32,
    days: u32,
}

#[derive(Serialize)]
struct Overview {
    cycle_length: u32,
    windows: Vec<WindowRow>,
}

#[derive(Serialize)]
struct NextCycle {
    reference_start: NaiveDate,
    cycle_length: u32,
    next_start: NaiveDate,
    days_until: i64,
}

pub fn run(action: PhaseAction) -> Result<(), Box<dyn std::error::Error>> {
    let kv = SqliteStore::open()?;
    let config = Config::load_or_default();
    let stored_length = settings::cycle_length(&kv, config.cycle.default_length)?;

    match action {
        PhaseAction::Status { date } => {
            let Some(reference) = settings::reference_start(&kv)? else {
                println!("null");
                return Ok(());
            };
            let today = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let Some(cycle) = compute_phase(Some(reference), stored_length, today)? else {
                println!("null");
                return Ok(());
            };
            let profile = cycle.profile();
            let status = PhaseStatus {
                day_in_cycle: cycle.day_in_cycle,
                phase: cycle.phase,
                name: profile.name,
                description: profile.description,
                color: profile.color,
                icon: profile.icon,
                hormones: profile.hormones,
                days_in_phase: cycle.days_in_phase,
                cycle_length: stored_length,
                day_count: days_since_start(reference, today),
                next_start: next_cycle_start(reference, stored_length),
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        PhaseAction::Overview { cycle_length } => {
            let length = cycle_length.unwrap_or(stored_length);
            let windows = phase_windows(length)?
                .into_iter()
                .map(|w| WindowRow {
                    phase: w.phase,
                    name: w.phase.profile().name,
                    start_day: w.start_day,
                    end_day: w.end_day,
                    days: w.days(),
                })
                .collect();
            let overview = Overview {
                cycle_length: length,
                windows,
            };
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
        PhaseAction::Next => {
            let Some(reference) = settings::reference_start(&kv)? else {
                println!("null");
                return Ok(());
            };
            let today = chrono::Local::now().date_naive();
            let next_start = next_cycle_start(reference, stored_length);
            let next = NextCycle {
                reference_start: reference,
                cycle_length: stored_length,
                next_start,
                days_until: (next_start - today).num_days(),
            };
            println!("{}", serde_json::to_string_pretty(&next)?);
        }
    }
    Ok(())
}
