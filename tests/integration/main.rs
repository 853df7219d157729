//! Catalog integration tests

mod catalog_tests;
mod menu_tests;

use std::path::Path;

use library_catalog::{config::StorageConfig, repository::Repository, Library};

/// Open a catalog stored under `dir`
pub fn open_library(dir: &Path) -> Library {
    Library::open(repository(dir)).expect("Failed to open catalog")
}

pub fn repository(dir: &Path) -> Repository {
    Repository::new(&StorageConfig {
        path: dir.join("library.json"),
        atomic: true,
    })
}
