//! Key-Value Slot Store
//!
//! The persisted medium: named slots holding raw strings. The file-backed
//! implementation keeps one file per slot; the in-memory one backs tests and
//! mirrors the browser storage the original data came from.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Abstract key-value storage with whole-slot reads and writes
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a slot; None when the slot has never been written
    async fn read(&self, slot: &str) -> DomainResult<Option<String>>;

    /// Replace a slot's content atomically from the caller's point of view
    async fn write(&self, slot: &str, payload: &str) -> DomainResult<()>;
}

/// File-backed store: one `<slot>.json` file per slot under a data directory
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn read(&self, slot: &str) -> DomainResult<Option<String>> {
        match tokio::fs::read_to_string(self.slot_path(slot)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Persistence(format!(
                "failed to read slot {}: {}",
                slot, e
            ))),
        }
    }

    async fn write(&self, slot: &str, payload: &str) -> DomainResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::Persistence(format!("failed to create data dir: {}", e)))?;
        tokio::fs::write(self.slot_path(slot), payload)
            .await
            .map_err(|e| DomainError::Persistence(format!("failed to write slot {}: {}", slot, e)))
    }
}

/// In-memory store for tests and ephemeral use
#[derive(Default)]
pub struct MemoryKvStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn read(&self, slot: &str) -> DomainResult<Option<String>> {
        Ok(self.slots.lock().await.get(slot).cloned())
    }

    async fn write(&self, slot: &str, payload: &str) -> DomainResult<()> {
        self.slots
            .lock()
            .await
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
