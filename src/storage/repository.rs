//! Session storage trait.

use async_trait::async_trait;

use crate::ClientError;

/// Key/value store backing the persisted session.
///
/// Implementations provide different storage backends:
/// - [`InMemorySessionStorage`](super::InMemorySessionStorage): lives as long as the process
/// - [`FileSessionStorage`](super::FileSessionStorage): survives restarts
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Returns the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), ClientError>;

    /// Removes every key.
    async fn clear(&self) -> Result<(), ClientError>;

    /// Returns true if `key` holds a value.
    async fn contains(&self, key: &str) -> Result<bool, ClientError> {
        Ok(self.get(key).await?.is_some())
    }
}
