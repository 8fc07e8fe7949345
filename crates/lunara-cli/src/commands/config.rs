//! Inspect and edit the on-disk configuration.

use clap::Subcommand;
use lunara_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single value
    Get {
        /// Dot-separated key (e.g. "cycle.default_length")
        key: String,
    },
    /// Change a single value and persist it
    Set {
        /// Dot-separated key (e.g. "stats.average_window")
        key: String,
        /// New value, parsed to the field's type
        value: String,
    },
    /// Print the whole configuration as JSON
    List,
    /// Rewrite the file with the built-in defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
