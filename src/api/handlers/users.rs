//! Handlers for user endpoints.

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::users::{ListUsersQuery, UserPayload, UserResponse};
use crate::api::extract::{Json, Path, Query};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// # Query Parameters
///
/// - `sort_order` - optional ordering field: `name` or `email`.
///   Absent → insertion order.
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users(query.sort_order).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Retrieves a single user by identifier.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the identifier.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ann",
///   "email": "ann@example.com"  // optional, unique
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a field-error array if validation fails.
/// Returns 400 Bad Request with a conflict message if the email is taken.
/// No repository write occurs in either case.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.into_new_user())
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Replaces an existing user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// Full replacement: every field is written, and an absent `email` clears
/// the stored one.
///
/// # Errors
///
/// Returns 400 Bad Request with a field-error array if validation fails.
/// Returns 404 Not Found if no user matches the identifier.
/// Returns 400 Bad Request if the new email belongs to another user.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update_user(id, payload.into_update())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user matches the identifier.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
