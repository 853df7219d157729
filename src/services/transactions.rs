//! Transaction history

use super::Library;
use crate::models::{Listing, Transaction};

impl Library {
    /// The log in the order events happened
    pub fn list_transactions(&self) -> Listing<'_, Transaction> {
        Listing::from_slice(&self.data.transactions)
    }
}
