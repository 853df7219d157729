//! Library Catalog
//!
//! A single-user library catalog manager: books, registered users, active
//! loans and a transaction log, kept in one JSON document and driven from
//! an interactive menu.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};
pub use crate::services::Library;
