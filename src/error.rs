//! Error types for the library catalog

use thiserror::Error;

/// Outcome codes reported alongside every error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    NotBorrowed = 22,
    IoFailure = 23,
    ParseFailure = 24,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad input: {0}")]
    BadInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("'{title}' is not borrowed by user {user_id}")]
    NotBorrowed { title: String, user_id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadInput(_) => ErrorCode::BadValue,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::Unavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowed { .. } => ErrorCode::NotBorrowed,
            AppError::Io(_) => ErrorCode::IoFailure,
            AppError::Parse(_) => ErrorCode::ParseFailure,
            AppError::Config(_) => ErrorCode::Failure,
        }
    }

    /// Persistence and configuration failures end the session; everything
    /// else is reported to the operator and the menu carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Parse(_) | AppError::Config(_)
        )
    }

    /// Message shown at the menu prompt
    pub fn operator_message(&self) -> String {
        match self {
            AppError::BadInput(msg) => msg.clone(),
            AppError::Conflict(_) => "User ID already exists!".to_string(),
            AppError::UserNotFound(_) => "User not found! Please register first.".to_string(),
            AppError::Unavailable(_) => "Book not available or out of stock!".to_string(),
            AppError::NotBorrowed { .. } => "This book was not borrowed by this user!".to_string(),
            AppError::Io(e) => format!("Storage error: {}", e),
            AppError::Parse(e) => format!("Catalog file is corrupt: {}", e),
            AppError::Config(e) => format!("Configuration error: {}", e),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
