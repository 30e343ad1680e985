//! Snapshot persistence for the leave management engine.
//!
//! The engine is written against the [`Store`] trait, which exposes
//! whole-snapshot `load`/`save` and nothing else. The service binary
//! uses [`FileStore`]; tests substitute [`MemoryStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::Snapshot;

/// Whole-snapshot persistence.
///
/// There are no partial updates: `load` always returns the entire
/// dataset and `save` replaces it. A store with no data yet yields the
/// default empty snapshot.
pub trait Store: Send {
    /// Loads the current snapshot, or the default one if nothing has
    /// been persisted yet.
    fn load(&self) -> EngineResult<Snapshot>;

    /// Replaces the persisted snapshot.
    fn save(&mut self, snapshot: &Snapshot) -> EngineResult<()>;
}
