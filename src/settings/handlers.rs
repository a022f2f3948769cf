/**
 * Settings HTTP Handlers
 *
 * - `GET /api/settings` - the caller's settings
 * - `PUT /api/settings` - partial update (name, notifications, currency)
 */

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ApiJson;
use crate::settings::db::{self, SettingsUpdate, UserSettings};

/// Request body for a partial settings update
#[derive(Debug, Deserialize, Default)]
pub struct SettingsUpdatePayload {
    pub name: Option<String>,
    pub notifications_enabled: Option<bool>,
    pub default_currency: Option<String>,
}

impl SettingsUpdatePayload {
    /// Validate the present fields; reject an update carrying none
    pub fn validate(self) -> Result<SettingsUpdate, ApiError> {
        // Character count, matching the column constraint
        if let Some(currency) = &self.default_currency {
            if currency.is_empty() || currency.chars().count() > 3 {
                return Err(ApiError::validation("Invalid default_currency format."));
            }
        }

        let update = SettingsUpdate {
            name: self.name,
            notifications_enabled: self.notifications_enabled,
            default_currency: self.default_currency,
        };

        if update.is_empty() {
            return Err(ApiError::validation("No settings provided to update."));
        }

        Ok(update)
    }
}

/// Response for a settings update
#[derive(Debug, Serialize)]
pub struct SettingsUpdateResponse {
    pub message: String,
    pub settings: UserSettings,
}

/// Fetch the caller's settings
pub async fn get_settings(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<UserSettings>, ApiError> {
    let settings = db::get_settings(&pool, caller.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;
    Ok(Json(settings))
}

/// Partially update the caller's settings
pub async fn update_settings(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    ApiJson(payload): ApiJson<SettingsUpdatePayload>,
) -> Result<Json<SettingsUpdateResponse>, ApiError> {
    let update = payload.validate()?;

    let settings = db::update_settings(&pool, caller.user_id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    tracing::info!("Settings updated for user {}", caller.user_id);

    Ok(Json(SettingsUpdateResponse {
        message: "Settings updated successfully".to_string(),
        settings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_update() {
        let payload = SettingsUpdatePayload::default();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_validate_currency_length() {
        let payload = SettingsUpdatePayload {
            default_currency: Some("EURO".to_string()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());

        let payload = SettingsUpdatePayload {
            default_currency: Some("EUR".to_string()),
            ..Default::default()
        };
        let update = payload.validate().unwrap();
        assert_eq!(update.default_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_validate_currency_counts_characters_not_bytes() {
        // Three characters, more than three bytes
        let payload = SettingsUpdatePayload {
            default_currency: Some("€£¥".to_string()),
            ..Default::default()
        };
        let update = payload.validate().unwrap();
        assert_eq!(update.default_currency.as_deref(), Some("€£¥"));

        let payload = SettingsUpdatePayload {
            default_currency: Some("EURO".to_string()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_validate_single_field() {
        let payload = SettingsUpdatePayload {
            notifications_enabled: Some(false),
            ..Default::default()
        };
        let update = payload.validate().unwrap();
        assert_eq!(update.notifications_enabled, Some(false));
        assert!(update.name.is_none());
    }
}
