//! JSON-backed document store for small persisted datasets
//!
//! Each dataset is addressed by a logical name ("quotes", "followage",
//! "lol_accounts") and stored as one pretty-printed JSON file under the
//! bot's data directory. Writes go through a temp file plus rename, and
//! read-modify-write cycles are serialized per document so concurrent
//! command invocations cannot interleave on the same file.

use crate::error::{EmberError, Result};
use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Document store mapping logical names to JSON files in a directory
#[derive(Debug)]
pub struct JsonStore {
    dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl JsonStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .map_err(|e| EmberError::store_with_source("Failed to create data directory", e))?;
        Ok(Self {
            dir,
            locks: Mutex::new(HashMap::new()),
        })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    fn lock_for(&self, name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock();
        locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Read a document, returning `None` if it does not exist yet
    pub async fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let lock = self.lock_for(name);
        let _guard = lock.lock().await;
        self.read_unlocked(name).await
    }

    /// Overwrite a document atomically (temp file + rename)
    pub async fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let lock = self.lock_for(name);
        let _guard = lock.lock().await;
        self.write_unlocked(name, value).await
    }

    /// Read-modify-write a document under the per-document lock
    ///
    /// Missing documents start from `default()`. Returns the stored value.
    pub async fn update<T, D, F>(&self, name: &str, default: D, mutate: F) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
        D: FnOnce() -> T,
        F: FnOnce(&mut T),
    {
        let lock = self.lock_for(name);
        let _guard = lock.lock().await;

        let mut value: T = match self.read_unlocked(name).await? {
            Some(value) => value,
            None => default(),
        };
        mutate(&mut value);
        self.write_unlocked(name, &value).await?;
        Ok(value)
    }

    async fn read_unlocked<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(EmberError::store_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                ))
            }
        };
        let value = serde_json::from_str(&data)?;
        Ok(Some(value))
    }

    async fn write_unlocked<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        let tmp_path = self.dir.join(format!("{}.json.tmp", name));
        let data = serde_json::to_string_pretty(value)?;

        tokio::fs::write(&tmp_path, data.as_bytes())
            .await
            .map_err(|e| {
                EmberError::store_with_source(format!("Failed to write {}", tmp_path.display()), e)
            })?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            EmberError::store_with_source(format!("Failed to replace {}", path.display()), e)
        })?;

        debug!("Stored document '{}' at {}", name, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Quotes {
        quotes: Vec<String>,
    }

    #[tokio::test]
    async fn test_read_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        let loaded: Option<Quotes> = store.read("quotes").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        let quotes = Quotes {
            quotes: vec!["first".to_string(), "second".to_string()],
        };
        store.write("quotes", &quotes).await.unwrap();

        let loaded: Quotes = store.read("quotes").await.unwrap().unwrap();
        assert_eq!(loaded, quotes);
        assert!(dir.path().join("quotes.json").exists());
    }

    #[tokio::test]
    async fn test_update_starts_from_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        let stored = store
            .update("quotes", Quotes::default, |quotes| {
                quotes.quotes.push("added".to_string());
            })
            .await
            .unwrap();
        assert_eq!(stored.quotes, vec!["added".to_string()]);

        let loaded: Quotes = store.read("quotes").await.unwrap().unwrap();
        assert_eq!(loaded.quotes, vec!["added".to_string()]);
    }

    #[tokio::test]
    async fn test_update_preserves_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();

        store
            .write(
                "quotes",
                &Quotes {
                    quotes: vec!["kept".to_string()],
                },
            )
            .await
            .unwrap();

        let stored = store
            .update("quotes", Quotes::default, |quotes| {
                quotes.quotes.push("added".to_string());
            })
            .await
            .unwrap();
        assert_eq!(stored.quotes.len(), 2);
        assert_eq!(stored.quotes[0], "kept");
    }

    #[tokio::test]
    async fn test_concurrent_updates_do_not_lose_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::new(dir.path()).unwrap());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .update("quotes", Quotes::default, move |quotes| {
                        quotes.quotes.push(format!("quote {}", i));
                    })
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let loaded: Quotes = store.read("quotes").await.unwrap().unwrap();
        assert_eq!(loaded.quotes.len(), 8);
    }
}
