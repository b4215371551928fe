//! Placement storage.
//!
//! The engine treats storage as a bulk-replace sink: clear everything, then
//! insert the complete placement list in one call. Implementations must
//! make `insert_placements` all-or-nothing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::models::Placement;

/// Durable home of the generated timetable.
#[async_trait]
pub trait PlacementStore: Send + Sync {
    /// Deletes every stored placement. Idempotent.
    async fn clear_all_placements(&self) -> Result<(), StoreError>;

    /// Inserts placements in one all-or-nothing operation.
    async fn insert_placements(&self, placements: &[Placement]) -> Result<(), StoreError>;

    /// Returns all stored placements.
    async fn load_placements(&self) -> Result<Vec<Placement>, StoreError>;
}

/// In-process store, with optional injected failures.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    placements: Mutex<Vec<Placement>>,
    clear_failure: Mutex<Option<String>>,
    insert_failure: Mutex<Option<String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with placements.
    pub fn with_placements(placements: Vec<Placement>) -> Self {
        Self {
            placements: Mutex::new(placements),
            ..Self::default()
        }
    }

    /// Makes subsequent clears fail with `message`.
    pub fn fail_clears(&self, message: impl Into<String>) {
        *self.clear_failure.lock() = Some(message.into());
    }

    /// Makes subsequent inserts fail with `message`.
    pub fn fail_inserts(&self, message: impl Into<String>) {
        *self.insert_failure.lock() = Some(message.into());
    }

    /// Removes injected failures.
    pub fn heal(&self) {
        *self.clear_failure.lock() = None;
        *self.insert_failure.lock() = None;
    }

    /// Snapshot of the stored placements.
    pub fn snapshot(&self) -> Vec<Placement> {
        self.placements.lock().clone()
    }

    /// Number of stored placements.
    pub fn len(&self) -> usize {
        self.placements.lock().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.placements.lock().is_empty()
    }
}

#[async_trait]
impl PlacementStore for InMemoryStore {
    async fn clear_all_placements(&self) -> Result<(), StoreError> {
        if let Some(msg) = self.clear_failure.lock().clone() {
            return Err(StoreError::Backend(msg));
        }
        self.placements.lock().clear();
        Ok(())
    }

    async fn insert_placements(&self, placements: &[Placement]) -> Result<(), StoreError> {
        if let Some(msg) = self.insert_failure.lock().clone() {
            return Err(StoreError::Backend(msg));
        }
        self.placements.lock().extend_from_slice(placements);
        Ok(())
    }

    async fn load_placements(&self) -> Result<Vec<Placement>, StoreError> {
        Ok(self.snapshot())
    }
}

/// Stores the placement table as a JSON array file.
///
/// Writes go to a sibling temporary file that is renamed over the target,
/// so a failed insert leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_all(&self, placements: &[Placement]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(placements)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PlacementStore for JsonFileStore {
    async fn clear_all_placements(&self) -> Result<(), StoreError> {
        self.write_all(&[]).await
    }

    async fn insert_placements(&self, placements: &[Placement]) -> Result<(), StoreError> {
        let mut all = self.load_placements().await?;
        all.extend_from_slice(placements);
        self.write_all(&all).await
    }

    async fn load_placements(&self) -> Result<Vec<Placement>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
