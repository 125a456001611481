//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserSortOrder, UserUpdate};

/// Request body for `POST /api/users` and `PUT /api/users/{id}`.
///
/// Fields are deserialized as optional so that an incomplete payload reaches
/// the validator and comes back as field errors instead of a serde rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    /// Optional, but must be a valid email address and unique when present.
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
}

impl UserPayload {
    /// Converts a validated payload into creation input.
    ///
    /// Must only be called after [`Validate::validate`] has passed.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            // Presence is enforced by the `required` rule.
            name: self.name.unwrap_or_default(),
            email: self.email,
        }
    }

    /// Converts a validated payload into replacement input.
    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            name: self.name.unwrap_or_default(),
            email: self.email,
        }
    }
}

/// Query parameters for `GET /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// Field to order by; defaults to insertion order.
    #[serde(default)]
    pub sort_order: UserSortOrder,
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
