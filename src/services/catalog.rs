//! Catalog management: adding and listing books

use super::Library;
use crate::{
    error::AppResult,
    models::{Book, CreateBook, Listing},
};

impl Library {
    /// Append a book. Titles are not deduplicated; the quantity is
    /// validated before anything is stored.
    pub fn add_book(&mut self, book: CreateBook) -> AppResult<Book> {
        let book = book.into_book()?;
        self.data.books.push(book.clone());
        self.persist()?;
        tracing::info!("Added book '{}' ({} copies)", book.title, book.quantity);
        Ok(book)
    }

    /// All books in the order they were added
    pub fn list_books(&self) -> Listing<'_, Book> {
        Listing::from_slice(&self.data.books)
    }

    /// First book whose title matches, ignoring case
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.data.books.iter().find(|b| b.matches_title(title))
    }
}
