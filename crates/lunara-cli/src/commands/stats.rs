//! Statistics over the cycle log.

use clap::Subcommand;
use lunara_core::storage::settings;
use lunara_core::{Config, CycleHistoryStore, SqliteStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Entry counts, rolling average, and trend
    Summary,
    /// Rolling average cycle length
    Average,
    /// Whether recent cycles lengthen, shorten, or hold steady
    Trend,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let kv = SqliteStore::open()?;
    let config = Config::load_or_default();
    let reference = settings::reference_start(&kv)?;
    let store = CycleHistoryStore::open(Box::new(kv))?;

    // Stats read the log with the in-progress cycle counted.
    let entries = store.resolve_current(reference);
    let analyzer = config.analyzer();

    match action {
        StatsAction::Summary => {
            let summary = analyzer.summarize(&entries);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Average => {
            let average = analyzer.average_length(&entries);
            println!("{}", serde_json::to_string_pretty(&average)?);
        }
        StatsAction::Trend => {
            let trend = analyzer.trend(&entries);
            println!("{}", serde_json::to_string_pretty(&trend)?);
        }
    }
    Ok(())
}
