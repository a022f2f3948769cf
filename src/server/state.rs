/**
 * Application State
 *
 * `AppState` is the dependency container built once at startup: the
 * PostgreSQL pool and the token key pair. Both are cheap to clone; there
 * is no other shared mutable state between requests.
 *
 * The `FromRef` implementations let handlers extract only the piece they
 * need (`State<PgPool>`, `State<TokenKeys>`) instead of the whole state.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Token signing and verification keys
    pub keys: TokenKeys,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(state: &AppState) -> Self {
        state.keys.clone()
    }
}
