//! # Key/value storage abstraction
//!
//! [`KeyValueStore`] is the seam between the user directory and the platform:
//! a synchronous string-keyed, string-valued store. Implementations live in
//! sibling modules ([`crate::memory`], [`crate::file_store`] and, on the web,
//! `local_storage`).
//!
//! The JSON helpers degrade a missing or unparseable payload to `None` so
//! callers can substitute their default without surfacing an error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Key holding the JSON array of user records.
pub const USERS_KEY: &str = "users";
/// Key holding the JSON object of column visibility flags.
pub const VISIBLE_COLUMNS_KEY: &str = "visibleColumns";
/// Key holding the TOML application config.
pub const SETTINGS_KEY: &str = "settings";

/// Synchronous string key/value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read and parse a JSON value. Absent or malformed payloads yield `None`.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored value");
            None
        }
    }
}

/// Serialise a value as JSON and store it.
pub fn write_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
