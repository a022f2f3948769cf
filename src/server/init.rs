/**
 * Server Initialization
 *
 * Builds the running application from configuration:
 *
 * 1. Connect the PostgreSQL pool
 * 2. Run embedded migrations
 * 3. Derive the token keys from the signing secret
 * 4. Assemble the router with the shared state
 *
 * The pool is returned alongside the router so the entry point can close
 * it after the server drains on shutdown.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create the Axum application and its database pool
pub async fn create_app(config: &AppConfig) -> Result<(Router, PgPool), sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run migrations: {:?}", e);
        sqlx::Error::Migrate(Box::new(e))
    })?;

    let state = AppState {
        pool: pool.clone(),
        keys: TokenKeys::from_secret(&config.jwt_secret),
    };

    tracing::info!("Router configured");
    Ok((create_router(state), pool))
}
