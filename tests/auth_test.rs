//! Registration, login, and token enforcement tests

mod common;

use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;

use finca::auth::tokens::{Claims, TokenKeys, TOKEN_TTL_SECS};

#[tokio::test]
#[serial]
async fn test_register_creates_user() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({ "email": "new@example.com", "password": "hunter22" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["email"], "new@example.com");
    assert!(body["user"]["id"].as_i64().is_some());
    // The password hash never leaves the database.
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_email_conflicts() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let payload = json!({ "email": "dup@example.com", "password": "hunter22" });
    let first = app.server.post("/api/auth/register").json(&payload).await;
    assert_eq!(first.status_code(), 201);

    let second = app.server.post("/api/auth/register").json(&payload).await;
    assert_eq!(second.status_code(), 409);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("dup@example.com")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[serial]
async fn test_register_missing_fields_rejected() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({ "email": "no-password@example.com" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert!(body["message"].is_string());

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({ "password": "hunter22" }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
#[serial]
async fn test_login_returns_verifiable_token() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (user_id, token) = common::register_and_login(&app, "kim@example.com", "hunter22").await;

    let keys = TokenKeys::from_secret(common::TEST_JWT_SECRET);
    let claims = keys.verify(&token).expect("token should verify");
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.email, "kim@example.com");
}

#[tokio::test]
#[serial]
async fn test_login_wrong_password_unauthorized() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (_, _) = common::register_and_login(&app, "pat@example.com", "hunter22").await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "pat@example.com", "password": "wrong-password" }))
        .await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_none());
}

#[tokio::test]
#[serial]
async fn test_login_unknown_email_unauthorized() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "hunter22" }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
#[serial]
async fn test_protected_route_without_token_unauthorized() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let response = app.server.get("/api/transactions").await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
#[serial]
async fn test_protected_route_with_garbage_token_forbidden() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let response = app
        .server
        .get("/api/transactions")
        .add_header("Authorization", "Bearer not.a.real.token")
        .await;
    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
#[serial]
async fn test_protected_route_with_expired_token_unauthorized() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (user_id, _) = common::register_and_login(&app, "old@example.com", "hunter22").await;

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        sub: user_id.to_string(),
        email: "old@example.com".to_string(),
        iat: now - 3 * TOKEN_TTL_SECS,
        exp: now - 2 * TOKEN_TTL_SECS,
    };
    let expired = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(common::TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .server
        .get("/api/transactions")
        .add_header("Authorization", format!("Bearer {}", expired))
        .await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Token expired. Please log in again.");
}
