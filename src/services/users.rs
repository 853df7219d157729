//! User registration

use super::Library;
use crate::{
    error::{AppError, AppResult},
    models::{User, Users},
};

impl Library {
    /// Register a new user. IDs are unique; names are not.
    pub fn register_user(&mut self, user_id: &str, name: &str) -> AppResult<User> {
        if self.data.users.contains_key(user_id) {
            return Err(AppError::Conflict(format!(
                "User with id {} already exists",
                user_id
            )));
        }

        self.data.users.insert(user_id.to_string(), name.to_string());
        self.persist()?;
        tracing::info!("Registered user {} ({})", user_id, name);
        Ok(User::new(user_id, name))
    }

    pub fn users(&self) -> &Users {
        &self.data.users
    }

    pub fn get_user(&self, user_id: &str) -> AppResult<User> {
        self.data
            .users
            .get(user_id)
            .map(|name| User::new(user_id, name.as_str()))
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {} not found", user_id)))
    }
}
