//! Persistence layer for catalog snapshots

pub mod snapshot_store;

use crate::{error::AppResult, models::snapshot::Snapshot};

pub use snapshot_store::JsonFileStore;

/// Where catalog snapshots are read from and written to
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore {
    /// Read the stored snapshot, `None` when nothing has been stored yet
    fn read(&self) -> AppResult<Option<Snapshot>>;

    /// Replace the stored snapshot
    fn write(&self, snapshot: &Snapshot) -> AppResult<()>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Main repository struct holding the snapshot store
pub struct Repository {
    pub snapshots: Box<dyn SnapshotStore>,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: impl SnapshotStore + 'static) -> Self {
        Self {
            snapshots: Box::new(store),
        }
    }
}
