/**
 * Router Configuration
 *
 * Assembles the full API surface:
 *
 * ## Public
 * - `GET  /`                  - liveness line
 * - `POST /api/auth/register` - user registration
 * - `POST /api/auth/login`    - user login
 *
 * ## Protected (bearer token required)
 * - `GET/POST        /api/transactions`
 * - `PUT/DELETE      /api/transactions/{transaction_id}`
 * - `GET/POST        /api/budgets`
 * - `PUT/DELETE      /api/budgets/{budget_id}`
 * - `GET             /api/categories`
 * - `GET/PUT         /api/settings`
 * - `GET             /api/dashboard/summary`
 * - `GET             /api/reports/summary`
 *
 * Protected routes sit behind the auth middleware layer; handlers read
 * the caller identity from request extensions, never from the client.
 */

use axum::routing::{get, post, put};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{login, register};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::{budgets, categories, dashboard, reports, settings, transactions};

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    let protected = Router::new()
        .route(
            "/api/transactions",
            get(transactions::handlers::list_transactions)
                .post(transactions::handlers::create_transaction),
        )
        .route(
            "/api/transactions/{transaction_id}",
            put(transactions::handlers::update_transaction)
                .delete(transactions::handlers::delete_transaction),
        )
        .route(
            "/api/budgets",
            get(budgets::handlers::list_budgets).post(budgets::handlers::create_budget),
        )
        .route(
            "/api/budgets/{budget_id}",
            put(budgets::handlers::update_budget).delete(budgets::handlers::delete_budget),
        )
        .route("/api/categories", get(categories::handlers::list_categories))
        .route(
            "/api/settings",
            get(settings::handlers::get_settings).put(settings::handlers::update_settings),
        )
        .route(
            "/api/dashboard/summary",
            get(dashboard::handlers::dashboard_summary),
        )
        .route(
            "/api/reports/summary",
            get(reports::handlers::report_summary),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/", get(root))
        .merge(public)
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Liveness endpoint
async fn root() -> &'static str {
    "Finca backend API is running"
}
