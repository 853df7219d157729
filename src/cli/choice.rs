//! Menu entries

use std::fmt;

/// One numbered entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddUser,
    AddBook,
    ShowBooks,
    BorrowBook,
    ReturnBook,
    ShowTransactions,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddUser,
        MenuChoice::AddBook,
        MenuChoice::ShowBooks,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::ShowTransactions,
        MenuChoice::Exit,
    ];

    /// Parse the operator's answer; `None` for anything not on the menu
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddUser),
            "2" => Some(MenuChoice::AddBook),
            "3" => Some(MenuChoice::ShowBooks),
            "4" => Some(MenuChoice::BorrowBook),
            "5" => Some(MenuChoice::ReturnBook),
            "6" => Some(MenuChoice::ShowTransactions),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddUser => 1,
            MenuChoice::AddBook => 2,
            MenuChoice::ShowBooks => 3,
            MenuChoice::BorrowBook => 4,
            MenuChoice::ReturnBook => 5,
            MenuChoice::ShowTransactions => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddUser => "Add User",
            MenuChoice::AddBook => "Add Book",
            MenuChoice::ShowBooks => "Show Books",
            MenuChoice::BorrowBook => "Borrow Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::ShowTransactions => "Show Transactions",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
