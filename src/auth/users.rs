/**
 * User Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// User row as persisted
///
/// Never serialized to clients directly; see [`PublicUser`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub notifications_enabled: bool,
    pub default_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Insert a new user row
pub async fn create_user(
    pool: &PgPool,
    name: Option<&str>,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING user_id, name, email, password_hash, notifications_enabled,
                  default_currency, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, name, email, password_hash, notifications_enabled,
               default_currency, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
