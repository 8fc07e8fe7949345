//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default cycle length and the plausible length bounds
//! - Statistics tuning (rolling average window, stable trend band)
//!
//! Configuration is stored at `~/.config/lunara/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::history::CycleStatsAnalyzer;

/// Cycle-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Cycle length assumed until the user sets or adopts their own.
    #[serde(default = "default_cycle_length")]
    pub default_length: u32,
    /// Shortest cycle length accepted when setting the length.
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    /// Longest cycle length accepted when setting the length.
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

/// Statistics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// How many recent cycle lengths feed the rolling average.
    #[serde(default = "default_average_window")]
    pub average_window: u32,
    /// Day difference below which the trend reads as stable.
    #[serde(default = "default_stable_band")]
    pub stable_band_days: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/lunara/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cycle: CycleConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

fn default_cycle_length() -> u32 {
    28
}
fn default_min_length() -> u32 {
    21
}
fn default_max_length() -> u32 {
    35
}
fn default_average_window() -> u32 {
    4
}
fn default_stable_band() -> f64 {
    1.0
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            default_length: default_cycle_length(),
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            average_window: default_average_window(),
            stable_band_days: default_stable_band(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cycle: CycleConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing the default file on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed,
    /// or if writing the initial default fails.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        if !path.exists() {
            let cfg = Self::default();
            cfg.save()?;
            return Ok(cfg);
        }
        Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, falling back to the defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        resolve(&tree, key).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a config value by dot-separated key and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be
    /// parsed into the field's type, or the file cannot be written.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut tree = serde_json::to_value(&*self)?;
        apply(&mut tree, key, value)?;
        *self = serde_json::from_value(tree)?;
        self.save()
    }

    /// Stats analyzer tuned by the `[stats]` section.
    pub fn analyzer(&self) -> CycleStatsAnalyzer {
        CycleStatsAnalyzer::with_settings(
            self.stats.average_window as usize,
            self.stats.stable_band_days,
        )
    }

    /// Whether `length` falls inside the configured plausible band.
    pub fn is_plausible_length(&self, length: u32) -> bool {
        length >= self.cycle.min_length && length <= self.cycle.max_length
    }

    /// Pull `length` into the configured plausible band.
    pub fn clamp_length(&self, length: u32) -> u32 {
        length.max(self.cycle.min_length).min(self.cycle.max_length)
    }
}

/// Follows `key` one dot-separated segment at a time.
fn resolve<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    key.split('.').try_fold(root, |node, segment| node.get(segment))
}

fn resolve_mut<'a>(
    root: &'a mut serde_json::Value,
    key: &str,
) -> Option<&'a mut serde_json::Value> {
    key.split('.')
        .try_fold(root, |node, segment| node.get_mut(segment))
}

/// Parses `raw` to match the JSON kind already stored in `slot`.
fn coerce(
    slot: &serde_json::Value,
    raw: &str,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    match slot {
        serde_json::Value::Bool(_) => Ok(serde_json::Value::Bool(raw.parse()?)),
        serde_json::Value::Number(_) => {
            if let Ok(whole) = raw.parse::<u64>() {
                return Ok(serde_json::Value::Number(whole.into()));
            }
            let float: f64 = raw
                .parse()
                .map_err(|_| format!("cannot parse '{raw}' as number"))?;
            serde_json::Number::from_f64(float)
                .map(serde_json::Value::Number)
                .ok_or_else(|| format!("cannot parse '{raw}' as number").into())
        }
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            Ok(serde_json::from_str(raw)?)
        }
        _ => Ok(serde_json::Value::String(raw.to_owned())),
    }
}

/// Replaces the value at `key`, keeping the field's existing type.
fn apply(
    root: &mut serde_json::Value,
    key: &str,
    raw: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if key.is_empty() {
        return Err("config key is empty".into());
    }

    let (section, field) = key.rsplit_once('.').unwrap_or(("", key));
    let parent = if section.is_empty() {
        root
    } else {
        resolve_mut(root, section).ok_or_else(|| format!("unknown config key: {key}"))?
    };
    let table = parent
        .as_object_mut()
        .ok_or_else(|| format!("unknown config key: {key}"))?;
    let slot = table
        .get(field)
        .ok_or_else(|| format!("unknown config key: {key}"))?;

    let replacement = coerce(slot, raw)?;
    table.insert(field.to_owned(), replacement);
    Ok(())
}
