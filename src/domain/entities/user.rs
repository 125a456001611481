//! User entity and associated input types.

use serde::Deserialize;
use sqlx::FromRow;

/// A registered user.
///
/// The identifier is assigned by the persistence layer on insert, never by
/// the client. `email` is optional but unique across all users when present.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: String, email: Option<String>) -> Self {
        Self { id, name, email }
    }
}

/// Input data for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
}

/// Full replacement for an existing user.
///
/// `PUT` semantics: every field is written, so an absent `email` clears the
/// stored one.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: Option<String>,
}

/// Field used to order user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserSortOrder {
    /// Insertion order, the default when no ordering is requested.
    #[default]
    Id,
    Name,
    Email,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(1, "Ann".to_string(), Some("ann@example.com".to_string()));

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email.as_deref(), Some("ann@example.com"));
    }

    #[test]
    fn test_user_without_email() {
        let user = User::new(2, "Bob".to_string(), None);

        assert_eq!(user.name, "Bob");
        assert!(user.email.is_none());
    }

    #[test]
    fn test_sort_order_default_is_id() {
        assert_eq!(UserSortOrder::default(), UserSortOrder::Id);
    }

    #[test]
    fn test_sort_order_deserializes_lowercase() {
        let order: UserSortOrder = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(order, UserSortOrder::Email);
    }
}
