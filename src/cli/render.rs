//! Text rendering of catalog rows

use crate::models::{Book, LoanReceipt, Transaction, TransactionAction};

pub fn book_line(book: &Book) -> String {
    format!(
        "{} by {} | Subject: {} | ISBN: {} | Quantity: {}",
        book.title, book.author, book.subject, book.isbn, book.quantity
    )
}

pub fn transaction_line(entry: &Transaction) -> String {
    format!(
        "{} - {} ({}) {} '{}'",
        entry.formatted_time(),
        entry.user_name,
        entry.user_id,
        entry.action,
        entry.title
    )
}

pub fn receipt_line(receipt: &LoanReceipt, action: TransactionAction) -> String {
    format!("{} {} '{}'.", receipt.user_name, action, receipt.title)
}
