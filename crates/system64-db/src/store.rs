//! The storage port and its in-memory implementation.
//!
//! [`KeyValueStore`] is the raw string interface. [`TypedStore`] layers JSON
//! and scalar helpers over any store, the way the callers actually use it.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DbError;
use crate::keys::StoreKey;

/// Opaque string key/value persistence.
///
/// Writes are synchronous; a successful `save` is durable as far as the
/// backing medium goes.
pub trait KeyValueStore {
    /// Store `value` at `key`, replacing any previous value.
    fn save(&mut self, key: StoreKey, value: &str) -> Result<(), DbError>;

    /// Read the value at `key`; `None` when missing.
    fn load(&self, key: StoreKey) -> Result<Option<String>, DbError>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove(&mut self, key: StoreKey) -> Result<(), DbError>;

    /// Delete every key in [`StoreKey::ALL`].
    fn clear(&mut self) -> Result<(), DbError> {
        for key in StoreKey::ALL {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// JSON and scalar helpers over a [`KeyValueStore`].
pub trait TypedStore: KeyValueStore {
    /// Serialize `value` as JSON and store it at `key`.
    fn save_json<T: Serialize>(&mut self, key: StoreKey, value: &T) -> Result<(), DbError> {
        let json = serde_json::to_string(value)?;
        self.save(key, &json)
    }

    /// Read the value at `key` and deserialize from JSON.
    fn load_json<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, DbError> {
        self.load(key)?
            .map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(DbError::from)
    }

    /// Store a scalar using its `Display` form.
    fn save_scalar<T: ToString>(&mut self, key: StoreKey, value: T) -> Result<(), DbError> {
        self.save(key, &value.to_string())
    }

    /// Read a scalar using its `FromStr` form.
    fn load_scalar<T: FromStr>(&self, key: StoreKey) -> Result<Option<T>, DbError> {
        match self.load(key)? {
            None => Ok(None),
            Some(raw) => raw.trim().parse().map(Some).map_err(|_parse_error| DbError::Parse {
                key: key.as_str(),
                value: raw,
            }),
        }
    }
}

impl<S: KeyValueStore + ?Sized> TypedStore for S {}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<StoreKey, String>,
}

impl MemoryStore {
    /// An empty store.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Everything currently stored.
    pub const fn entries(&self) -> &BTreeMap<StoreKey, String> {
        &self.entries
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&mut self, key: StoreKey, value: &str) -> Result<(), DbError> {
        self.entries.insert(key, value.to_owned());
        Ok(())
    }

    fn load(&self, key: StoreKey) -> Result<Option<String>, DbError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), DbError> {
        self.entries.remove(&key);
        Ok(())
    }
}
