/**
 * Authentication Middleware
 *
 * Protects routes that require a caller identity. The middleware:
 *
 * 1. Extracts the token from the `Authorization: Bearer <token>` header
 * 2. Verifies signature and expiry against the configured signing key
 * 3. Parses the identity claim into a user id
 * 4. Attaches the identity to request extensions for handlers
 *
 * Failure mapping, per the API contract:
 * - Missing or malformed header -> 401
 * - Expired token               -> 401 (distinguished message, so clients
 *                                  can prompt re-login)
 * - Any other invalid token     -> 403
 *
 * Handlers never trust a client-supplied user id; the caller id always
 * comes from the verified token.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;

/// Caller identity decoded from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// Verify the bearer token and attach the caller identity
pub async fn require_auth(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::MissingToken
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        ApiError::MissingToken
    })?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        e
    })?;

    let user_id = claims.user_id()?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Used as a handler parameter on protected routes to read the identity
/// set by [`require_auth`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingToken
            })?;

        Ok(AuthUser(user))
    }
}
