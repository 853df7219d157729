//! Repository layer: the catalog as one JSON document on disk

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::CatalogDocument,
};

/// Reads and rewrites the whole catalog file. No locking, no incremental
/// updates: every save replaces the previous document.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
    atomic: bool,
}

impl Repository {
    /// Create a repository over the given storage settings
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            path: config.path.clone(),
            atomic: config.atomic,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or an empty one when the file does not exist yet
    pub fn load(&self) -> AppResult<CatalogDocument> {
        if !self.path.exists() {
            tracing::info!("No catalog at {}, starting empty", self.path.display());
            return Ok(CatalogDocument::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let document: CatalogDocument = serde_json::from_str(&raw)?;
        tracing::debug!(
            "Loaded {} books, {} users, {} loans, {} transactions from {}",
            document.books.len(),
            document.users.len(),
            document.borrowed_books.len(),
            document.transactions.len(),
            self.path.display()
        );
        Ok(document)
    }

    /// Overwrite the file with the full document
    pub fn save(&self, document: &CatalogDocument) -> AppResult<()> {
        if self.atomic {
            let staging = self.staging_path();
            let staged = write_document(&staging, document)
                .and_then(|()| fs::rename(&staging, &self.path).map_err(AppError::from));
            if let Err(e) = staged {
                if let Err(cleanup) = fs::remove_file(&staging) {
                    tracing::debug!("Could not remove {}: {}", staging.display(), cleanup);
                }
                return Err(e);
            }
        } else {
            write_document(&self.path, document)?;
        }
        tracing::debug!("Saved catalog to {}", self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

/// Pretty-print with four-space indentation, the layout of existing files
fn write_document(path: &Path, document: &CatalogDocument) -> AppResult<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    document
        .serialize(&mut serializer)
        .map_err(std::io::Error::from)?;
    writer.flush()?;
    Ok(())
}
