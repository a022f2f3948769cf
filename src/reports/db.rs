//! Database operations for report aggregation

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{PgPool, Row};

use crate::domain::TransactionType;

/// One category's total within a breakdown
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category_id: i64,
    pub category_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
}

/// All-time sum of a user's transactions of one type
pub async fn total_by_type(
    pool: &PgPool,
    user_id: i64,
    kind: TransactionType,
) -> Result<Decimal, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COALESCE(SUM(amount), 0) AS total
        FROM transactions
        WHERE user_id = $1 AND type = $2
        "#,
    )
    .bind(user_id)
    .bind(kind.as_str())
    .fetch_one(pool)
    .await?;

    row.try_get("total")
}

/// Per-category totals for one type, largest first
pub async fn totals_by_category(
    pool: &PgPool,
    user_id: i64,
    kind: TransactionType,
) -> Result<Vec<CategoryTotal>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT t.category_id, c.name AS category_name, SUM(t.amount) AS total_amount
        FROM transactions t
        JOIN categories c ON c.category_id = t.category_id
        WHERE t.user_id = $1 AND t.type = $2
        GROUP BY t.category_id, c.name
        ORDER BY total_amount DESC
        "#,
    )
    .bind(user_id)
    .bind(kind.as_str())
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(CategoryTotal {
                category_id: row.try_get("category_id")?,
                category_name: row.try_get("category_name")?,
                total_amount: row.try_get("total_amount")?,
            })
        })
        .collect()
}
