//! Database operations for the dashboard summary

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgPool, Row};

use crate::domain::TransactionType;

/// A recent transaction as shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct RecentTransaction {
    pub id: i64,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Option<String>,
}

/// A budget at a glance: spent against total
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    pub id: i64,
    pub category: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub spent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// All-time balance: income minus expenses, zero with no rows
pub async fn balance(pool: &PgPool, user_id: i64) -> Result<Decimal, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COALESCE(SUM(CASE WHEN type = 'income' THEN amount ELSE -amount END), 0)
               AS total_balance
        FROM transactions
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    row.try_get("total_balance")
}

/// The five most recent transactions, with category names
pub async fn recent_transactions(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<RecentTransaction>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT t.transaction_id AS id, t.notes AS description, t.amount,
               t.transaction_date AS date, t.type, c.name AS category
        FROM transactions t
        LEFT JOIN categories c ON c.category_id = t.category_id
        WHERE t.user_id = $1
        ORDER BY t.transaction_date DESC, t.created_at DESC
        LIMIT 5
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let kind: String = row.try_get("type")?;
            let kind = kind.parse::<TransactionType>().map_err(|_| {
                sqlx::Error::Decode(format!("unrecognized transaction type: {}", kind).into())
            })?;
            Ok(RecentTransaction {
                id: row.try_get("id")?,
                description: row.try_get("description")?,
                amount: row.try_get("amount")?,
                date: row.try_get("date")?,
                kind,
                category: row.try_get("category")?,
            })
        })
        .collect()
}

/// Up to three budgets with derived spent amounts
///
/// Uses the same period/type/category predicate as the budget listing so
/// the two views never disagree.
pub async fn budget_overview(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<BudgetStatus>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT b.budget_id AS id,
               c.name AS category,
               b.amount AS total,
               COALESCE(SUM(t.amount) FILTER (
                   WHERE t.type = b.budget_type
                     AND t.transaction_date >= b.period_start_date
                     AND t.transaction_date <= b.period_end_date
               ), 0) AS spent
        FROM budgets b
        JOIN categories c ON c.category_id = b.category_id
        LEFT JOIN transactions t ON t.category_id = b.category_id
                                AND t.user_id = b.user_id
        WHERE b.user_id = $1
        GROUP BY b.budget_id, c.name
        ORDER BY c.name
        LIMIT 3
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(BudgetStatus {
                id: row.try_get("id")?,
                category: row.try_get("category")?,
                spent: row.try_get("spent")?,
                total: row.try_get("total")?,
            })
        })
        .collect()
}
