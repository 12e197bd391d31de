//! File-backed session storage.
//!
//! All keys live in a single JSON object, rewritten on every change.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use super::repository::SessionStorage;
use crate::ClientError;

/// Session storage persisted to one JSON file.
///
/// This is what lets the `expiredAt` marker outlive a restart of the client,
/// the desktop analogue of a page reload.
///
/// # Example
///
/// ```rust,ignore
/// use grc_session::storage::FileSessionStorage;
///
/// let storage = FileSessionStorage::new("/home/me/.config/grc/session.json")?;
/// ```
#[derive(Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Creates the storage, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::Storage(format!("Failed to create storage directory: {e}"))
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, ClientError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ClientError::Storage(format!("Failed to read storage file: {e}")))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| ClientError::Storage(format!("Failed to parse storage file: {e}")))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), ClientError> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| ClientError::Serialization(format!("Failed to serialize storage: {e}")))?;

        std::fs::write(&self.path, content)
            .map_err(|e| ClientError::Storage(format!("Failed to write storage file: {e}")))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.read_all()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries)
    }

    async fn remove(&self, key: &str) -> Result<(), ClientError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                ClientError::Storage(format!("Failed to delete storage file: {e}"))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use rand::Rng;
    use rand::distributions::Alphanumeric;

    use super::*;
    use crate::storage::{EXPIRED_AT_KEY, TOKEN_KEY};

    fn temp_path() -> PathBuf {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        env::temp_dir()
            .join(format!("grc_storage_test_{suffix}"))
            .join("session.json")
    }

    fn cleanup(path: &PathBuf) {
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[tokio::test]
    async fn test_values_survive_new_instance() {
        let path = temp_path();
        let storage = FileSessionStorage::new(&path).unwrap();
        storage.set(TOKEN_KEY, "abc").await.unwrap();
        storage.set(EXPIRED_AT_KEY, "1700000000000").await.unwrap();

        let reopened = FileSessionStorage::new(&path).unwrap();
        assert_eq!(reopened.get(TOKEN_KEY).await.unwrap().as_deref(), Some("abc"));
        assert_eq!(
            reopened.get(EXPIRED_AT_KEY).await.unwrap().as_deref(),
            Some("1700000000000")
        );

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let path = temp_path();
        let storage = FileSessionStorage::new(&path).unwrap();

        assert!(storage.get(TOKEN_KEY).await.unwrap().is_none());
        assert!(storage.remove(TOKEN_KEY).await.is_ok());

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let path = temp_path();
        let storage = FileSessionStorage::new(&path).unwrap();
        storage.set(TOKEN_KEY, "abc").await.unwrap();
        storage.set("risks.filter", "open").await.unwrap();

        storage.remove(TOKEN_KEY).await.unwrap();
        assert!(storage.get(TOKEN_KEY).await.unwrap().is_none());
        assert!(storage.contains("risks.filter").await.unwrap());

        storage.clear().await.unwrap();
        assert!(!storage.path().exists());
        assert!(storage.get("risks.filter").await.unwrap().is_none());

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let path = temp_path();
        let storage = FileSessionStorage::new(&path).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let err = storage.get(TOKEN_KEY).await.unwrap_err();
        assert!(matches!(err, ClientError::Storage(_)));

        cleanup(&path);
    }
}
