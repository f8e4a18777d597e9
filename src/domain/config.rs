use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ripeness::{DEFAULT_RECHECK_INTERVAL_DAYS, RecheckPolicy};

/// Tunable thresholds for the pantry views.
///
/// Stored as TOML next to the ingredient data. Every field may be omitted,
/// in which case the default is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// How many days ahead the expiring-soon view looks.
    expiring_window_days: u32,

    /// Days allowed between freshness checks of items with a ripeness status.
    recheck_interval_days: u32,

    /// Number of entries shown by the recently-added view.
    recent_limit: usize,

    /// Day threshold for the countdown-based expiring selection.
    expiring_threshold_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expiring_window_days: default_expiring_window_days(),
            recheck_interval_days: default_recheck_interval_days(),
            recent_limit: default_recent_limit(),
            expiring_threshold_days: default_expiring_threshold_days(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration from `path`, falling back to the defaults if
    /// it is missing or invalid.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Days ahead covered by the expiring-soon view.
    #[must_use]
    pub const fn expiring_window_days(&self) -> u32 {
        self.expiring_window_days
    }

    /// Days allowed between freshness checks.
    #[must_use]
    pub const fn recheck_interval_days(&self) -> u32 {
        self.recheck_interval_days
    }

    /// The recheck policy built from [`Self::recheck_interval_days`].
    #[must_use]
    pub fn recheck_policy(&self) -> RecheckPolicy {
        RecheckPolicy::new(self.recheck_interval_days)
    }

    /// Entries shown by the recently-added view.
    #[must_use]
    pub const fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// Threshold of the countdown-based expiring selection.
    #[must_use]
    pub const fn expiring_threshold_days(&self) -> u32 {
        self.expiring_threshold_days
    }

    /// Sets the expiring-soon window.
    pub const fn set_expiring_window_days(&mut self, days: u32) {
        self.expiring_window_days = days;
    }

    /// Sets the recheck interval.
    pub const fn set_recheck_interval_days(&mut self, days: u32) {
        self.recheck_interval_days = days;
    }

    /// Sets the recently-added limit.
    pub const fn set_recent_limit(&mut self, limit: usize) {
        self.recent_limit = limit;
    }

    /// Sets the countdown threshold.
    pub const fn set_expiring_threshold_days(&mut self, days: u32) {
        self.expiring_threshold_days = days;
    }
}

const fn default_expiring_window_days() -> u32 {
    7
}

const fn default_recheck_interval_days() -> u32 {
    DEFAULT_RECHECK_INTERVAL_DAYS
}

const fn default_recent_limit() -> usize {
    5
}

const fn default_expiring_threshold_days() -> u32 {
    3
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_expiring_window_days")]
        expiring_window_days: u32,

        #[serde(default = "default_recheck_interval_days")]
        recheck_interval_days: u32,

        #[serde(default = "default_recent_limit")]
        recent_limit: usize,

        #[serde(default = "default_expiring_threshold_days")]
        expiring_threshold_days: u32,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                expiring_window_days,
                recheck_interval_days,
                recent_limit,
                expiring_threshold_days,
            } => Self {
                expiring_window_days,
                recheck_interval_days,
                recent_limit,
                expiring_threshold_days,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            expiring_window_days: config.expiring_window_days,
            recheck_interval_days: config.recheck_interval_days,
            recent_limit: config.recent_limit,
            expiring_threshold_days: config.expiring_threshold_days,
        }
    }
}
