//! Tracker settings commands.

use chrono::NaiveDate;
use clap::Subcommand;
use lunara_core::storage::settings;
use lunara_core::{Config, CycleHistoryStore, SqliteStore, TrackerSettings};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the reference start date and cycle length
    Show,
    /// Set the reference start date of the current cycle
    SetStart {
        /// First day of the current cycle (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Set the personal cycle length in days
    SetLength {
        /// Length in days
        length: u32,
    },
    /// Adopt the rolling average from the log as the cycle length
    AdoptAverage,
    /// Forget the reference start date
    ClearStart,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let kv = SqliteStore::open()?;
    let config = Config::load_or_default();

    match action {
        SettingsAction::Show => {
            let snapshot = TrackerSettings::load(&kv, config.cycle.default_length)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        SettingsAction::SetStart { date } => {
            settings::set_reference_start(&kv, date)?;
            println!("ok");
        }
        SettingsAction::SetLength { length } => {
            if !config.is_plausible_length(length) {
                return Err(format!(
                    "cycle length {length} outside plausible range {}-{}",
                    config.cycle.min_length, config.cycle.max_length
                )
                .into());
            }
            settings::set_cycle_length(&kv, length)?;
            println!("ok");
        }
        SettingsAction::AdoptAverage => {
            let reference = settings::reference_start(&kv)?;
            let store = CycleHistoryStore::open(Box::new(kv))?;
            let entries = store.resolve_current(reference);
            let average = config
                .analyzer()
                .average_length(&entries)
                .ok_or("no completed cycles to average")?;
            let adopted = config.clamp_length(average.round() as u32);

            // The first handle moved into the store; write through a fresh one.
            let kv = SqliteStore::open()?;
            settings::set_cycle_length(&kv, adopted)?;
            println!("adopted cycle length: {adopted}");
        }
        SettingsAction::ClearStart => {
            settings::clear_reference_start(&kv)?;
            println!("ok");
        }
    }
    Ok(())
}
