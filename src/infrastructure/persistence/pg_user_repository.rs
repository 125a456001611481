//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserSortOrder, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user storage and retrieval.
///
/// All statements bind parameters; the sort column in `list` is mapped from
/// a closed enum, never from client input directly.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn order_column(sort: UserSortOrder) -> &'static str {
    match sort {
        UserSortOrder::Id => "id",
        UserSortOrder::Name => "name",
        UserSortOrder::Email => "email",
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(user)
    }

    async fn list(&self, sort: UserSortOrder) -> Result<Vec<User>, AppError> {
        // Secondary id ordering keeps results deterministic on ties.
        let query = format!(
            "SELECT id, name, email FROM users ORDER BY {}, id",
            order_column(sort)
        );

        let users = sqlx::query_as::<_, User>(&query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3
            WHERE id = $1
            RETURNING id, name, email
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
