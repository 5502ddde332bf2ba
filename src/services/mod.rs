//! Business logic services

pub mod catalog;
pub mod loans;
pub mod snapshot;
pub mod users;

pub use catalog::{AddBookOutcome, Catalog};
pub use loans::{BorrowOutcome, ReturnOutcome};

use crate::{error::AppResult, repository::Repository};

/// A catalog bound to the store it is loaded from and saved to
pub struct LibraryService {
    pub catalog: Catalog,
    repository: Repository,
}

impl LibraryService {
    /// Create a service with an empty catalog; call [`LibraryService::load`] to restore state
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: Catalog::new(),
            repository,
        }
    }

    /// Replace the catalog with the stored snapshot.
    ///
    /// A store with nothing in it is a first run and leaves the catalog empty.
    /// Returns whether a snapshot was found.
    pub fn load(&mut self) -> AppResult<bool> {
        match self.repository.snapshots.read()? {
            Some(snapshot) => {
                self.catalog = Catalog::from_snapshot(snapshot);
                tracing::info!(
                    "Loaded {} books and {} users from {}",
                    self.catalog.all_books().count(),
                    self.catalog.all_users().count(),
                    self.repository.snapshots.describe()
                );
                Ok(true)
            }
            None => {
                tracing::info!("No saved data found, starting fresh");
                self.catalog = Catalog::new();
                Ok(false)
            }
        }
    }

    /// Write the catalog to the store. Failures are logged and returned.
    pub fn save(&self) -> AppResult<()> {
        let snapshot = self.catalog.to_snapshot();
        match self.repository.snapshots.write(&snapshot) {
            Ok(()) => {
                tracing::info!(
                    "Data saved successfully to {}",
                    self.repository.snapshots.describe()
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to save data: {}", e);
                Err(e)
            }
        }
    }
}
