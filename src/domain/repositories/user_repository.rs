//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserSortOrder, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// Provides CRUD operations plus lookup by unique email, which backs the
/// conflict check performed before creation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds a user by email.
    ///
    /// Used to check whether an email is already taken before creating or
    /// updating a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Lists all users ordered by the requested field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, sort: UserSortOrder) -> Result<Vec<User>, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces a user's fields.
    ///
    /// Returns `Ok(None)` if no user matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// Deletes a user.
    ///
    /// Returns `Ok(true)` if the user was found and removed, `Ok(false)` if
    /// not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
