//! Business logic: the catalog store and its operations
//!
//! [`Library`] owns every collection of the catalog and is the only thing
//! that mutates them. Each operation module adds its own `impl Library`
//! block; every successful mutation is written to disk before it returns.

pub mod catalog;
pub mod loans;
pub mod transactions;
pub mod users;

use crate::{
    error::AppResult,
    models::CatalogDocument,
    repository::Repository,
};

/// The catalog store
#[derive(Debug)]
pub struct Library {
    repository: Repository,
    data: CatalogDocument,
}

impl Library {
    /// Load the catalog through the repository, starting empty if there is
    /// no file yet
    pub fn open(repository: Repository) -> AppResult<Self> {
        let data = repository.load()?;
        tracing::info!(
            "Catalog opened from {} ({} books, {} users)",
            repository.path().display(),
            data.books.len(),
            data.users.len()
        );
        Ok(Self { repository, data })
    }

    /// Snapshot of the full document, as it would be saved
    pub fn document(&self) -> &CatalogDocument {
        &self.data
    }

    /// Write the whole catalog back to storage
    fn persist(&self) -> AppResult<()> {
        self.repository.save(&self.data)
    }
}
