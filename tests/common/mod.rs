//! Common test utilities
//!
//! Builds the real router over a test database and provides helpers for
//! registering users and seeding data. Integration tests need a running
//! PostgreSQL instance named by `TEST_DATABASE_URL`; when it is not set,
//! `spawn_app` returns `None` and the caller skips itself, so the unit
//! suite stays runnable without infrastructure.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use finca::auth::tokens::TokenKeys;
use finca::routes::create_router;
use finca::server::state::AppState;

/// Signing secret shared by the test state and token assertions
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A running test application
pub struct TestApp {
    pub server: TestServer,
    pub pool: PgPool,
}

/// Spin up the router over a clean test database
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn spawn_app() -> Option<TestApp> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    // Reset user data; the globally seeded categories survive.
    sqlx::query("TRUNCATE TABLE transactions, budgets RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("failed to truncate transactions and budgets");
    sqlx::query("DELETE FROM categories WHERE user_id IS NOT NULL")
        .execute(&pool)
        .await
        .expect("failed to delete user categories");
    sqlx::query("DELETE FROM users")
        .execute(&pool)
        .await
        .expect("failed to delete users");

    let state = AppState {
        pool: pool.clone(),
        keys: TokenKeys::from_secret(TEST_JWT_SECRET),
    };
    let server = TestServer::new(create_router(state)).expect("failed to start test server");

    Some(TestApp { server, pool })
}

/// Register a user and log in, returning `(user_id, token)`
pub async fn register_and_login(app: &TestApp, email: &str, password: &str) -> (i64, String) {
    let response = app
        .server
        .post("/api/auth/register")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(
        response.status_code(),
        201,
        "registration failed: {}",
        response.text()
    );

    let response = app
        .server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), 200, "login failed: {}", response.text());

    let body: serde_json::Value = response.json();
    let user_id = body["user"]["id"].as_i64().expect("user id in login body");
    let token = body["token"].as_str().expect("token in login body").to_string();
    (user_id, token)
}

/// Look up a seeded global category by name
pub async fn global_category_id(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT category_id FROM categories WHERE name = $1 AND user_id IS NULL",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("seeded category missing")
}

/// Record a transaction through the API, returning its id
pub async fn post_transaction(
    app: &TestApp,
    token: &str,
    category_id: i64,
    amount: &str,
    kind: &str,
    date: &str,
) -> i64 {
    let response = app
        .server
        .post("/api/transactions")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&serde_json::json!({
            "category_id": category_id,
            "amount": amount,
            "type": kind,
            "transaction_date": date,
        }))
        .await;
    assert_eq!(
        response.status_code(),
        201,
        "transaction create failed: {}",
        response.text()
    );
    let body: serde_json::Value = response.json();
    body["transaction_id"].as_i64().expect("transaction id")
}
