//! Data models for the library catalog

pub mod book;
pub mod catalog;
pub mod loan;
pub mod transaction;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use catalog::{CatalogDocument, Listing};
pub use loan::{ActiveLoans, LoanReceipt};
pub use transaction::{Transaction, TransactionAction};
pub use user::{User, Users};
