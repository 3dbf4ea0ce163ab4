//! # Application configuration: the `settings` entry
//!
//! Defines the TOML configuration stored under the [`SETTINGS_KEY`] entry of
//! the platform key/value store. It controls the simulated latency of saves
//! and deletes, notification auto-dismissal, and how new record ids are
//! allocated.
//!
//! ## Structure
//!
//! ```toml
//! [timing]
//! simulated_delay_ms = 500        # delay before a save/delete commits
//! notification_timeout_secs = 0   # 0 keeps notifications until closed
//!
//! [users]
//! id_strategy = "next-after-max"  # or "session-counter"
//! ```
//!
//! All structs derive `Default` so that a missing, empty or malformed entry is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, SETTINGS_KEY};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

/// Latency and notification timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay applied before a save or delete is committed.
    #[serde(default = "default_simulated_delay")]
    pub simulated_delay_ms: u64,
    /// Seconds before a notification dismisses itself. 0 disables.
    #[serde(default)]
    pub notification_timeout_secs: u64,
}

fn default_simulated_delay() -> u64 {
    500
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay(),
            notification_timeout_secs: 0,
        }
    }
}

/// User record settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

/// How a new record id is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// One more than the largest id in the collection.
    #[default]
    NextAfterMax,
    /// A counter starting at 1 on every load. Ids can repeat across reloads.
    SessionCounter,
}

impl AppConfig {
    /// Builder method to set the simulated delay.
    pub fn with_simulated_delay(mut self, ms: u64) -> Self {
        self.timing.simulated_delay_ms = ms;
        self
    }

    /// Builder method to set the notification timeout.
    pub fn with_notification_timeout(mut self, secs: u64) -> Self {
        self.timing.notification_timeout_secs = secs;
        self
    }

    /// Builder method to set the id strategy.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.users.id_strategy = strategy;
        self
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.timing.simulated_delay_ms)
    }

    /// `None` when notifications stay until closed.
    pub fn notification_timeout(&self) -> Option<Duration> {
        match self.timing.notification_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read the config from a store, falling back to the default.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(SETTINGS_KEY) else {
            return Self::default();
        };
        Self::from_toml(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring malformed settings");
            Self::default()
        })
    }

    /// Write the config to a store.
    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), crate::StoreError> {
        let raw = self
            .to_toml()
            .map_err(|e| crate::StoreError::Backend(e.to_string()))?;
        store.set(SETTINGS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.simulated_delay(), Duration::from_millis(500));
        assert_eq!(config.notification_timeout(), None);
        assert_eq!(config.users.id_strategy, IdStrategy::NextAfterMax);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml("[timing]\nnotification_timeout_secs = 4\n").unwrap();
        assert_eq!(config.timing.simulated_delay_ms, 500);
        assert_eq!(config.notification_timeout(), Some(Duration::from_secs(4)));

        let config = AppConfig::from_toml("[users]\nid_strategy = \"session-counter\"\n").unwrap();
        assert_eq!(config.users.id_strategy, IdStrategy::SessionCounter);
    }

    #[test]
    fn test_config_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(AppConfig::load(&store), AppConfig::default());

        let config = AppConfig::default()
            .with_simulated_delay(0)
            .with_notification_timeout(3)
            .with_id_strategy(IdStrategy::SessionCounter);
        config.save(&store).unwrap();

        assert_eq!(AppConfig::load(&store), config);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, "[timing\nnot toml").unwrap();
        assert_eq!(AppConfig::load(&store), AppConfig::default());
    }
}
