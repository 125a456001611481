//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserSortOrder, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating, retrieving, updating, and deleting users.
///
/// Enforces email uniqueness before any write and maps missing records to
/// [`AppError::NotFound`]. Input shape validation happens earlier, at the
/// DTO boundary; by the time a payload reaches this service it is
/// structurally valid.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists all users, ordered by the requested field.
    pub async fn list_users(&self, sort: UserSortOrder) -> Result<Vec<User>, AppError> {
        self.repository.list(sort).await
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if let Some(email) = &new_user.email {
            self.ensure_email_available(email, None).await?;
        }

        self.repository.create(new_user).await
    }

    /// Replaces an existing user's fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    /// Returns [`AppError::Conflict`] if the new email belongs to another user.
    pub async fn update_user(&self, id: i64, update: UserUpdate) -> Result<User, AppError> {
        // Existence check first so a missing id reports 404, not a conflict.
        self.get_user(id).await?;

        if let Some(email) = &update.email {
            self.ensure_email_available(email, Some(id)).await?;
        }

        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user matches `id`.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }

    /// Counts stored users. Used by the health check.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Fails with a conflict if `email` is taken by a user other than `exclude_id`.
    async fn ensure_email_available(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(existing) = self.repository.find_by_email(email).await?
            && Some(existing.id) != exclude_id
        {
            return Err(AppError::conflict("A user with this email already exists"));
        }

        Ok(())
    }
}
