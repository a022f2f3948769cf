//! Database operations for user settings

use serde::Serialize;
use sqlx::PgPool;

/// The settings projection of a user row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserSettings {
    pub name: Option<String>,
    pub email: String,
    pub notifications_enabled: bool,
    pub default_currency: String,
}

/// Partial settings update
///
/// Each recognized optional field maps to a fixed column. Email is not
/// updatable through settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub name: Option<String>,
    pub notifications_enabled: Option<bool>,
    pub default_currency: Option<String>,
}

impl SettingsUpdate {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.notifications_enabled.is_none()
            && self.default_currency.is_none()
    }
}

/// Fetch a user's settings
pub async fn get_settings(
    pool: &PgPool,
    user_id: i64,
) -> Result<Option<UserSettings>, sqlx::Error> {
    sqlx::query_as::<_, UserSettings>(
        r#"
        SELECT name, email, notifications_enabled, default_currency
        FROM users
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Apply a partial settings update, returning the new projection
pub async fn update_settings(
    pool: &PgPool,
    user_id: i64,
    update: &SettingsUpdate,
) -> Result<Option<UserSettings>, sqlx::Error> {
    sqlx::query_as::<_, UserSettings>(
        r#"
        UPDATE users
        SET name = COALESCE($1, name),
            notifications_enabled = COALESCE($2, notifications_enabled),
            default_currency = COALESCE($3, default_currency),
            updated_at = NOW()
        WHERE user_id = $4
        RETURNING name, email, notifications_enabled, default_currency
        "#,
    )
    .bind(&update.name)
    .bind(update.notifications_enabled)
    .bind(&update.default_currency)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
