//! In-memory session storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::repository::SessionStorage;
use crate::ClientError;

/// Session storage held in a `HashMap` behind a `RwLock`.
///
/// Clones share the same map, which lets a test hand one clone to the monitor
/// and inspect the other.
#[derive(Clone, Default)]
pub struct InMemorySessionStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?;

        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.entries
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?
            .remove(key);

        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        self.entries
            .write()
            .map_err(|_| ClientError::Storage("Lock poisoned".to_owned()))?
            .clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{EXPIRED_AT_KEY, TOKEN_KEY};

    #[tokio::test]
    async fn test_set_and_get() {
        let storage = InMemorySessionStorage::new();
        storage.set(TOKEN_KEY, "abc").await.unwrap();

        assert_eq!(storage.get(TOKEN_KEY).await.unwrap().as_deref(), Some("abc"));
        assert!(storage.contains(TOKEN_KEY).await.unwrap());
        assert!(!storage.contains(EXPIRED_AT_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let storage = InMemorySessionStorage::new();
        assert!(storage.remove("nothing").await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let storage = InMemorySessionStorage::new();
        let other = storage.clone();

        storage.set(EXPIRED_AT_KEY, "1700000000000").await.unwrap();
        assert_eq!(other.len(), 1);

        other.clear().await.unwrap();
        assert!(storage.is_empty());
    }
}
