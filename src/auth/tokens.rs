/**
 * Session Tokens
 *
 * Signed, time-limited bearer credentials embedding the user's identity.
 * Tokens are never persisted server-side; each request verifies the
 * signature and expiry independently.
 *
 * The signing key is process-wide configuration, carried by `TokenKeys`
 * and injected through `AppState` so tests can run with distinct keys.
 *
 * `sub` is the single authoritative identity claim. A token whose `sub`
 * does not parse as a user id is invalid; no other claim name is probed.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ApiError;

/// Token lifetime: one hour
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a decimal string
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the identity claim into a user id
    ///
    /// A non-numeric `sub` means the token was not issued by us and is
    /// treated as invalid, not as an internal error.
    pub fn user_id(&self) -> Result<i64, ApiError> {
        self.sub.parse::<i64>().map_err(|_| ApiError::InvalidToken)
    }
}

/// Encoding and decoding keys derived from the configured signing secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Derive both keys from a shared secret
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for a user, expiring in [`TOKEN_TTL_SECS`]
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, ApiError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| {
                tracing::error!("System clock before Unix epoch: {:?}", e);
                ApiError::internal("Failed to generate authentication token.")
            })?
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to sign token: {:?}", e);
            ApiError::internal("Failed to generate authentication token.")
        })
    }

    /// Verify a token's signature and expiry, returning its claims
    ///
    /// Expiry is reported as `TokenExpired` so clients can prompt
    /// re-login; every other failure is `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::default();
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(ApiError::TokenExpired),
                _ => Err(ApiError::InvalidToken),
            },
        }
    }
}
