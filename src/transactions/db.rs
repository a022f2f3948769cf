//! Database operations for transactions

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::TransactionType;

/// A transaction as returned to the client
///
/// `category_name` is joined from the categories table for display.
/// Amounts serialize as decimal strings.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub transaction_id: i64,
    pub user_id: i64,
    pub category_id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub transaction_date: NaiveDate,
    pub notes: Option<String>,
    pub attachment_url: Option<String>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating or replacing a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub category_id: i64,
    pub amount: Decimal,
    pub kind: TransactionType,
    pub transaction_date: NaiveDate,
    pub notes: Option<String>,
    pub attachment_url: Option<String>,
}

fn row_to_transaction(row: &PgRow) -> Result<Transaction, sqlx::Error> {
    let kind: String = row.try_get("type")?;
    let kind = kind.parse::<TransactionType>().map_err(|_| {
        sqlx::Error::Decode(format!("unrecognized transaction type: {}", kind).into())
    })?;

    Ok(Transaction {
        transaction_id: row.try_get("transaction_id")?,
        user_id: row.try_get("user_id")?,
        category_id: row.try_get("category_id")?,
        amount: row.try_get("amount")?,
        kind,
        transaction_date: row.try_get("transaction_date")?,
        notes: row.try_get("notes")?,
        attachment_url: row.try_get("attachment_url")?,
        category_name: row.try_get("category_name").unwrap_or(None),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// All transactions for a user, newest first
pub async fn list_transactions(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<Transaction>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT t.transaction_id, t.user_id, t.category_id, t.amount, t.type,
               t.transaction_date, t.notes, t.attachment_url, t.created_at,
               t.updated_at, c.name AS category_name
        FROM transactions t
        LEFT JOIN categories c ON c.category_id = t.category_id
        WHERE t.user_id = $1
        ORDER BY t.transaction_date DESC, t.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_transaction).collect()
}

/// Insert a transaction for a user
pub async fn insert_transaction(
    pool: &PgPool,
    user_id: i64,
    new: &NewTransaction,
) -> Result<Transaction, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO transactions
            (user_id, category_id, amount, type, transaction_date, notes, attachment_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING transaction_id, user_id, category_id, amount, type,
                  transaction_date, notes, attachment_url, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(new.category_id)
    .bind(new.amount)
    .bind(new.kind.as_str())
    .bind(new.transaction_date)
    .bind(&new.notes)
    .bind(&new.attachment_url)
    .fetch_one(pool)
    .await?;

    row_to_transaction(&row)
}

/// Replace a transaction's mutable fields, scoped to the owner
///
/// Returns `None` when the row does not exist or belongs to another user.
pub async fn update_transaction(
    pool: &PgPool,
    user_id: i64,
    transaction_id: i64,
    new: &NewTransaction,
) -> Result<Option<Transaction>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE transactions
        SET category_id = $1, amount = $2, type = $3, transaction_date = $4,
            notes = $5, attachment_url = $6, updated_at = NOW()
        WHERE transaction_id = $7 AND user_id = $8
        RETURNING transaction_id, user_id, category_id, amount, type,
                  transaction_date, notes, attachment_url, created_at, updated_at
        "#,
    )
    .bind(new.category_id)
    .bind(new.amount)
    .bind(new.kind.as_str())
    .bind(new.transaction_date)
    .bind(&new.notes)
    .bind(&new.attachment_url)
    .bind(transaction_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_transaction).transpose()
}

/// Delete a transaction, scoped to the owner
///
/// Returns whether a row was removed.
pub async fn delete_transaction(
    pool: &PgPool,
    user_id: i64,
    transaction_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM transactions
        WHERE transaction_id = $1 AND user_id = $2
        "#,
    )
    .bind(transaction_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
