//! The persisted catalog document

use serde::{Deserialize, Serialize};

use super::{ActiveLoans, Book, Transaction, Users};

/// Whole-file shape of the catalog. Absent keys load as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    pub books: Vec<Book>,
    pub users: Users,
    pub borrowed_books: ActiveLoans,
    pub transactions: Vec<Transaction>,
}

/// A report that keeps "nothing to show" apart from a populated listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a, T> {
    Empty,
    Rows(&'a [T]),
}

impl<'a, T> Listing<'a, T> {
    pub fn from_slice(rows: &'a [T]) -> Self {
        if rows.is_empty() {
            Listing::Empty
        } else {
            Listing::Rows(rows)
        }
    }

    pub fn rows(&self) -> &'a [T] {
        match self {
            Listing::Empty => &[],
            Listing::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }
}
