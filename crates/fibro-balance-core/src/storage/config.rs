//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Default spoon capacity for a fresh budget
//! - Trend window and recent-entry listing sizes
//! - Day-rollover polling interval
//! - Log level
//! - Export file name prefix
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::spoons::DEFAULT_CAPACITY;
use crate::store::{DEFAULT_RECENT_LIMIT, DEFAULT_TREND_WINDOW};

/// Energy budget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoonsConfig {
    /// Capacity of a budget created from scratch or after a full reset.
    #[serde(default = "default_capacity")]
    pub default_total: u32,
}

/// Tracker views configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

/// Day-rollover check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolloverConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `FIBRO_BALANCE_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// CSV export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub spoons: SpoonsConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub rollover: RolloverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

// Default functions
fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}
fn default_trend_window() -> usize {
    DEFAULT_TREND_WINDOW
}
fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}
fn default_poll_interval() -> u64 {
    60
}
fn default_log_level() -> String {
    "warn".into()
}
fn default_file_prefix() -> String {
    "fibro-balance-entries".into()
}

impl Default for SpoonsConfig {
    fn default() -> Self {
        Self {
            default_total: default_capacity(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            trend_window: default_trend_window(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Default for RolloverConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("not a leaf value".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if no file exists.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory. Returns error if key is unknown.
    ///
    /// Numeric settings are brought back into range afterwards, the same way
    /// user input is elsewhere.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.normalize();
        Ok(())
    }

    /// Pull numeric settings back into usable ranges.
    pub fn normalize(&mut self) {
        self.spoons.default_total = crate::validation::Bounds::CAPACITY
            .clamp_whole_value(self.spoons.default_total as f64);
        self.tracker.trend_window = self.tracker.trend_window.max(1);
        self.tracker.recent_limit = self.tracker.recent_limit.max(1);
        self.rollover.poll_interval_secs = self.rollover.poll_interval_secs.max(1);
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        let mut cfg = Self::load().unwrap_or_else(|e| {
            tracing::warn!("config unavailable, using defaults: {e}");
            Self::default()
        });
        cfg.normalize();
        cfg
    }
}
