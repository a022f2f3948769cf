//! Dashboard summary tests

mod common;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use serial_test::serial;
use std::str::FromStr;

fn decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal string")).expect("parseable decimal")
}

#[tokio::test]
#[serial]
async fn test_empty_dashboard() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (_, token) = common::register_and_login(&app, "fresh@example.com", "hunter22").await;

    let response = app
        .server
        .get("/api/dashboard/summary")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(decimal(&body["balance"]), Decimal::ZERO);
    assert_eq!(body["recentTransactions"].as_array().unwrap().len(), 0);
    assert_eq!(body["budgetOverview"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn test_balance_subtracts_expenses() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (_, token) = common::register_and_login(&app, "bal@example.com", "hunter22").await;
    let salary = common::global_category_id(&app.pool, "Salary").await;
    let groceries = common::global_category_id(&app.pool, "Groceries").await;

    common::post_transaction(&app, &token, salary, "1000.00", "income", "2024-01-01").await;
    common::post_transaction(&app, &token, groceries, "1050.00", "expense", "2024-01-15").await;

    let response = app
        .server
        .get("/api/dashboard/summary")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    let body: serde_json::Value = response.json();

    // A negative balance is reported as-is, never clamped.
    assert_eq!(decimal(&body["balance"]), Decimal::from_str("-50.00").unwrap());
}

#[tokio::test]
#[serial]
async fn test_recent_transactions_capped_at_five() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (_, token) = common::register_and_login(&app, "cap@example.com", "hunter22").await;
    let groceries = common::global_category_id(&app.pool, "Groceries").await;

    for day in 1..=7 {
        common::post_transaction(
            &app,
            &token,
            groceries,
            "10.00",
            "expense",
            &format!("2024-01-{:02}", day),
        )
        .await;
    }

    let response = app
        .server
        .get("/api/dashboard/summary")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    let body: serde_json::Value = response.json();
    let recent = body["recentTransactions"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    // Newest first
    assert_eq!(recent[0]["date"], "2024-01-07");
    assert_eq!(recent[4]["date"], "2024-01-03");
    assert_eq!(recent[0]["category"], "Groceries");
    assert_eq!(recent[0]["type"], "expense");
}

#[tokio::test]
#[serial]
async fn test_budget_overview_uses_budget_type() {
    let Some(app) = common::spawn_app().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };

    let (_, token) = common::register_and_login(&app, "over@example.com", "hunter22").await;
    let salary = common::global_category_id(&app.pool, "Salary").await;

    // An income budget counts income transactions, not expenses.
    common::post_transaction(&app, &token, salary, "500.00", "income", "2024-01-10").await;
    common::post_transaction(&app, &token, salary, "80.00", "expense", "2024-01-12").await;

    let response = app
        .server
        .post("/api/budgets")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "January salary",
            "category_id": salary,
            "amount": "2000.00",
            "start_date": "2024-01-01",
            "end_date": "2024-01-31",
            "budget_type": "income",
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    let response = app
        .server
        .get("/api/dashboard/summary")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    let body: serde_json::Value = response.json();
    let overview = body["budgetOverview"].as_array().unwrap();
    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0]["category"], "Salary");
    assert_eq!(decimal(&overview[0]["spent"]), Decimal::from_str("500.00").unwrap());
    assert_eq!(decimal(&overview[0]["total"]), Decimal::from_str("2000.00").unwrap());
}
