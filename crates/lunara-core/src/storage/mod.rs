mod config;
pub mod kv;
pub mod settings;

pub use config::{Config, CycleConfig, StatsConfig};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use settings::TrackerSettings;

use std::path::PathBuf;

/// Returns `~/.config/lunara[-dev]/` based on LUNARA_ENV.
///
/// Set LUNARA_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LUNARA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lunara-dev")
    } else {
        base_dir.join("lunara")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
