//! In-memory snapshot store.

use crate::error::EngineResult;
use crate::models::Snapshot;

use super::Store;

/// A [`Store`] that keeps the snapshot in memory.
///
/// Used by tests and benchmarks in place of [`super::FileStore`];
/// nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> EngineResult<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        self.snapshot = snapshot.clone();
        Ok(())
    }
}
