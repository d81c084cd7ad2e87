//! Versioned single-entry slots.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{Cache, CacheError};

/// What a slot writes under its key.
///
/// The layout is `{ "state": ..., "version": N }` so that a reader can tell a
/// stale schema apart from a current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// The stored state.
    pub state: T,
    /// Schema version of `state`.
    pub version: u32,
}

/// A typed, durable slot holding one value under a fixed namespace key.
///
/// # Example
///
/// ```rust,ignore
/// use flame_cache::{Cache, Slot};
///
/// let slot: Slot<Vec<String>> = Slot::new(Cache::open(".flame")?, "favourites");
/// slot.store(&vec!["fries".to_string()])?;
/// assert_eq!(slot.load()?, Some(vec!["fries".to_string()]));
/// ```
pub struct Slot<T> {
    cache: Cache,
    key: String,
    version: u32,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Slot<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a slot at schema version 0.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            version: 0,
            _phantom: PhantomData,
        }
    }

    /// Set the schema version this slot reads and writes.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// The namespace key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The schema version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Read the stored state.
    ///
    /// Returns `None` when nothing is stored or when the stored envelope was
    /// written under a different schema version.
    pub fn load(&self) -> Result<Option<T>, CacheError> {
        match self.cache.get::<Envelope<T>>(&self.key)? {
            Some(envelope) if envelope.version == self.version => Ok(Some(envelope.state)),
            Some(envelope) => {
                tracing::debug!(
                    key = %self.key,
                    stored = envelope.version,
                    expected = self.version,
                    "ignoring slot written under another version"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Replace the stored state.
    pub fn store(&self, state: &T) -> Result<(), CacheError> {
        let envelope = Envelope {
            state,
            version: self.version,
        };
        self.cache.set(&self.key, &envelope)
    }

    /// Remove the stored state.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }

    /// Check whether anything is stored.
    pub fn exists(&self) -> Result<bool, CacheError> {
        self.cache.exists(&self.key)
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            key: self.key.clone(),
            version: self.version,
            _phantom: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("key", &self.key)
            .field("version", &self.version)
            .finish()
    }
}
