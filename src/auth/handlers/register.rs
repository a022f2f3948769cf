/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * 1. Validate the body (email and non-empty password required)
 * 2. Pre-check the email for uniqueness
 * 3. Hash the password with bcrypt at a fixed cost
 * 4. Insert the user row
 * 5. Return the public user projection (201)
 *
 * A duplicate email yields 409, whether caught by the pre-check or by the
 * unique constraint on insert. The password hash never leaves the server.
 */

use axum::{extract::State, http::StatusCode, Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::users::{create_user, get_user_by_email, PublicUser};
use crate::error::types::SQLSTATE_UNIQUE_VIOLATION;
use crate::error::ApiError;
use crate::middleware::json::ApiJson;

/// Bcrypt cost factor, matching the observed 10-round configuration
pub const HASH_COST: u32 = 10;

/// Register a new user
pub async fn register(
    State(pool): State<PgPool>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (name, email, password) = request.validate()?;

    tracing::info!("Registration request for email: {}", email);

    if get_user_by_email(&pool, &email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", email);
        return Err(ApiError::conflict("User with this email already exists."));
    }

    let password_hash = bcrypt::hash(&password, HASH_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Registration failed. Please try again.")
    })?;

    let user = create_user(&pool, name.as_deref(), &email, &password_hash)
        .await
        .map_err(|e| {
            // The pre-check races with concurrent registrations; the unique
            // constraint is the authority.
            if ApiError::sqlstate(&e).as_deref() == Some(SQLSTATE_UNIQUE_VIOLATION) {
                ApiError::conflict("User with this email already exists.")
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                ApiError::internal("Registration failed. Please try again.")
            }
        })?;

    tracing::info!("User registered: {} (id {})", user.email, user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: PublicUser::from(&user),
        }),
    ))
}
