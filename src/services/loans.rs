//! Loan management: borrowing and returning books

use super::Library;
use crate::{
    error::{AppError, AppResult},
    models::{ActiveLoans, LoanReceipt, Transaction, TransactionAction},
};

impl Library {
    /// Lend one copy of the first book matching `title` that still has
    /// copies on the shelf.
    pub fn borrow_book(&mut self, title: &str, user_id: &str) -> AppResult<LoanReceipt> {
        let user = self.get_user(user_id)?;

        let book = self
            .data
            .books
            .iter_mut()
            .find(|b| b.matches_title(title) && b.is_available())
            .ok_or_else(|| AppError::Unavailable(format!("No copy of '{}' available", title)))?;
        book.quantity -= 1;
        let remaining = book.quantity;

        if let Some(previous) = self
            .data
            .borrowed_books
            .insert(title.to_string(), user_id.to_string())
        {
            if previous != user_id {
                tracing::warn!(
                    "Loan of '{}' to {} replaces the record for {}",
                    title,
                    user_id,
                    previous
                );
            }
        }
        self.data.transactions.push(Transaction::now(
            user_id,
            user.name.as_str(),
            title,
            TransactionAction::Borrowed,
        ));
        self.persist()?;

        tracing::info!("{} borrowed '{}', {} left", user_id, title, remaining);
        Ok(LoanReceipt {
            user_id: user.id,
            user_name: user.name,
            title: title.to_string(),
            remaining: Some(remaining),
        })
    }

    /// Take back a book from the user recorded as holding it.
    ///
    /// The loan is looked up by the exact title it was borrowed under.
    /// When no book record matches any more, the loan is still cleared and
    /// no copy is restored.
    pub fn return_book(&mut self, title: &str, user_id: &str) -> AppResult<LoanReceipt> {
        let held_by_user = self
            .data
            .borrowed_books
            .get(title)
            .is_some_and(|holder| holder == user_id);
        if !held_by_user {
            return Err(AppError::NotBorrowed {
                title: title.to_string(),
                user_id: user_id.to_string(),
            });
        }
        let user = self.get_user(user_id)?;

        let remaining = match self.data.books.iter_mut().find(|b| b.matches_title(title)) {
            Some(book) => {
                book.quantity = book.quantity.saturating_add(1);
                Some(book.quantity)
            }
            None => {
                tracing::warn!("Returned '{}' has no catalog entry, copy not restored", title);
                None
            }
        };

        self.data.transactions.push(Transaction::now(
            user_id,
            user.name.as_str(),
            title,
            TransactionAction::Returned,
        ));
        self.data.borrowed_books.shift_remove(title);
        self.persist()?;

        tracing::info!("{} returned '{}'", user_id, title);
        Ok(LoanReceipt {
            user_id: user.id,
            user_name: user.name,
            title: title.to_string(),
            remaining,
        })
    }

    pub fn active_loans(&self) -> &ActiveLoans {
        &self.data.borrowed_books
    }

    /// User currently recorded as holding `title`, if any
    pub fn loan_holder(&self, title: &str) -> Option<&str> {
        self.data.borrowed_books.get(title).map(String::as_str)
    }
}
