//! Flat-file JSON snapshot store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::Snapshot;

use super::Store;

/// A [`Store`] persisting the snapshot as pretty-printed JSON at a
/// fixed path.
///
/// Loading a path that does not exist yet creates the file with the
/// default empty snapshot, so a fresh service starts from a valid data
/// file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, snapshot: &Snapshot) -> EngineResult<()> {
        let content =
            serde_json::to_string_pretty(snapshot).map_err(|e| EngineError::StoreSave {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        fs::write(&self.path, content).map_err(|e| EngineError::StoreSave {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl Store for FileStore {
    fn load(&self) -> EngineResult<Snapshot> {
        if !self.path.exists() {
            let snapshot = Snapshot::default();
            self.write(&snapshot)?;
            return Ok(snapshot);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| EngineError::StoreLoad {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| EngineError::StoreLoad {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn save(&mut self, snapshot: &Snapshot) -> EngineResult<()> {
        self.write(snapshot)
    }
}
