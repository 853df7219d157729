//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Catalog entry. `quantity` counts the copies currently on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub isbn: String,
    pub quantity: u32,
}

impl Book {
    /// Case-insensitive title comparison used by every lookup
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }
}

/// Add book request, as typed at the prompt
#[derive(Debug, Clone, Default)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub isbn: String,
    pub quantity: String,
}

impl CreateBook {
    /// Validate the request and build the stored record
    pub fn into_book(self) -> AppResult<Book> {
        let quantity = parse_quantity(&self.quantity)?;
        Ok(Book {
            title: self.title,
            author: self.author,
            subject: self.subject,
            isbn: self.isbn,
            quantity,
        })
    }
}

/// Parse a copy count, ignoring surrounding whitespace
pub fn parse_quantity(raw: &str) -> AppResult<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        AppError::BadInput(format!(
            "Invalid quantity '{}': expected a non-negative whole number.",
            raw.trim()
        ))
    })
}
