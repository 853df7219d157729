//! Loan (borrow) model and related types

use indexmap::IndexMap;

/// Outstanding loans keyed by book title, as typed by the borrower.
///
/// Only one holder is tracked per title: a second borrow of the same
/// title replaces the first holder.
pub type ActiveLoans = IndexMap<String, String>;

/// Result of a successful borrow or return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    /// Copies of the matched book left on the shelf, when one matched
    pub remaining: Option<u32>,
}
