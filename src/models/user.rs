//! User model and related types

use indexmap::IndexMap;

/// Registered users, user ID to display name, in registration order
pub type Users = IndexMap<String, String>;

/// A single registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
