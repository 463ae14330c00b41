//! Observable values backed by key-value storage.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

use super::observable::{Observable, SubscriptionId};
use crate::error::StorageError;
use crate::ports::KeyValueStorage;

/// An [`Observable`] whose value is loaded from, and written through to,
/// one storage key.
///
/// A missing or unparseable stored string yields the default. Writes update
/// memory first, so readers see the new value even if persisting fails.
pub struct PersistedValue<T> {
    key: String,
    value: Observable<T>,
    storage: Arc<dyn KeyValueStorage>,
}

impl<T> Clone for PersistedValue<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<T> PersistedValue<T>
where
    T: FromStr + Display + Clone + Send + Sync + 'static,
{
    /// Loads the value stored under `key`, or `default`.
    pub fn load(key: impl Into<String>, default: T, storage: Arc<dyn KeyValueStorage>) -> Self {
        let key = key.into();
        let initial = match storage.get(&key) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                tracing::debug!(%key, %raw, "ignoring unparseable stored value");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to read stored value");
                default
            }
        };

        Self {
            key,
            value: Observable::new(initial),
            storage,
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Sets and persists the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be persisted; the in-memory
    /// value is updated regardless.
    pub fn set(&self, value: T) -> Result<(), StorageError> {
        let raw = value.to_string();
        self.value.set(value);
        self.storage.set(&self.key, &raw).inspect_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "failed to persist value");
        })?;
        tracing::debug!(key = %self.key, value = %raw, "persisted value");
        Ok(())
    }

    /// Registers a change subscriber.
    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        self.value.subscribe(subscriber)
    }

    /// Storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::testing::{FailingStorage, MemoryStorage};
    use imageer_domain::PerPage;

    #[test]
    fn missing_key_yields_default() {
        let storage = Arc::new(MemoryStorage::new());
        let value = PersistedValue::load("k", PerPage::Twenty, storage);
        assert_eq!(value.get(), PerPage::Twenty);
    }

    #[test]
    fn garbage_yields_default() {
        let storage = Arc::new(MemoryStorage::with([("k", "lots")]));
        let value = PersistedValue::load("k", PerPage::Twenty, storage);
        assert_eq!(value.get(), PerPage::Twenty);
    }

    #[test]
    fn set_writes_through() {
        let storage = Arc::new(MemoryStorage::new());
        let value = PersistedValue::load("k", PerPage::Twenty, storage.clone());

        value.set(PerPage::Fifty).expect("persist");

        assert_eq!(storage.raw("k").as_deref(), Some("50"));
        assert_eq!(value.get(), PerPage::Fifty);
    }

    #[test]
    fn failed_persist_still_updates_memory() {
        let value = PersistedValue::load("k", PerPage::Twenty, Arc::new(FailingStorage));

        assert!(value.set(PerPage::Ten).is_err());
        assert_eq!(value.get(), PerPage::Ten);
    }
}
