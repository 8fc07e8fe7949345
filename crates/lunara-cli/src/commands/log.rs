//! Cycle history log commands.

use chrono::NaiveDate;
use clap::Subcommand;
use lunara_core::storage::settings;
use lunara_core::{CycleHistoryStore, EntryPatch, SqliteStore};

#[derive(Subcommand)]
pub enum LogAction {
    /// List logged cycle starts, newest first
    List {
        /// Fill the newest entry's length from the active reference start
        #[arg(long)]
        resolve_current: bool,
    },
    /// Log a cycle start date
    Add {
        /// First day of the cycle (YYYY-MM-DD)
        date: NaiveDate,
        /// Free-form note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Change an entry's date or note
    Edit {
        /// Entry ID
        id: String,
        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New note
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete an entry
    Remove {
        /// Entry ID
        id: String,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let kv = SqliteStore::open()?;

    match action {
        LogAction::List { resolve_current } => {
            let reference = settings::reference_start(&kv)?;
            let store = CycleHistoryStore::open(Box::new(kv))?;
            let entries = if resolve_current {
                store.resolve_current(reference)
            } else {
                store.entries().to_vec()
            };
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        LogAction::Add { date, note } => {
            let mut store = CycleHistoryStore::open(Box::new(kv))?;
            let log = store.add_entry(date, note)?;
            println!("Entry added: {date}");
            println!("{}", serde_json::to_string_pretty(&log)?);
        }
        LogAction::Edit { id, date, note } => {
            let mut patch = EntryPatch::new();
            if let Some(date) = date {
                patch = patch.with_start_date(date);
            }
            if let Some(note) = note {
                patch = patch.with_note(note);
            }
            if patch.is_empty() {
                return Err("nothing to change: pass --date and/or --note".into());
            }
            let mut store = CycleHistoryStore::open(Box::new(kv))?;
            let log = store.update_entry(&id, patch)?;
            println!("Entry updated:");
            println!("{}", serde_json::to_string_pretty(&log)?);
        }
        LogAction::Remove { id } => {
            let mut store = CycleHistoryStore::open(Box::new(kv))?;
            store.delete_entry(&id)?;
            println!("Entry removed: {id}");
        }
    }
    Ok(())
}
