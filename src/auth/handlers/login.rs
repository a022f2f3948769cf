/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a signed token with a one-hour expiry
 *
 * # Security
 *
 * Unknown email and wrong password produce the same 401 response, so the
 * endpoint cannot be used to enumerate accounts. Password verification
 * uses bcrypt's constant-time comparison. Passwords are never logged.
 */

use axum::{extract::State, Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::users::{get_user_by_email, PublicUser};
use crate::error::ApiError;
use crate::middleware::json::ApiJson;
use crate::server::state::AppState;

/// Authenticate a user and issue a session token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (email, password) = request.validate()?;

    tracing::info!("Login request for email: {}", email);

    let user = get_user_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, email not found: {}", email);
            ApiError::InvalidCredentials
        })?;

    let valid = bcrypt::verify(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("Login failed due to a server error.")
    })?;

    if !valid {
        tracing::warn!("Login failed, invalid password for: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.keys.issue(user.user_id, &user.email)?;

    tracing::info!("Login successful for: {}", user.email);

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        user: PublicUser::from(&user),
        token,
    }))
}
