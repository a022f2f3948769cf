//! Database operations for budgets
//!
//! The spent amount is computed SQL-side. The listing query aggregates in
//! one pass with a filtered sum; single-budget reads use the same
//! predicate in a standalone aggregation so the two paths cannot drift.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::TransactionType;

/// A budget as returned to the client, with its derived spent amount
#[derive(Debug, Clone, Serialize)]
pub struct BudgetEntry {
    pub budget_id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub allocated_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub spent_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_type: TransactionType,
}

/// A budget row as persisted, without derived fields
#[derive(Debug, Clone)]
pub struct BudgetRecord {
    pub budget_id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub name: String,
    pub amount: Decimal,
    pub budget_type: TransactionType,
    pub period_start_date: NaiveDate,
    pub period_end_date: NaiveDate,
}

/// Fields for creating a budget
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub name: String,
    pub category_id: i64,
    pub amount: Decimal,
    pub budget_type: TransactionType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Partial update for a budget
///
/// Each recognized optional field maps to a fixed column; there is no
/// dynamic SQL assembly.
#[derive(Debug, Clone, Default)]
pub struct BudgetUpdate {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub budget_type: Option<TransactionType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BudgetUpdate {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_id.is_none()
            && self.amount.is_none()
            && self.budget_type.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

fn parse_budget_type(raw: String) -> Result<TransactionType, sqlx::Error> {
    raw.parse::<TransactionType>()
        .map_err(|_| sqlx::Error::Decode(format!("unrecognized budget type: {}", raw).into()))
}

fn row_to_record(row: &PgRow) -> Result<BudgetRecord, sqlx::Error> {
    Ok(BudgetRecord {
        budget_id: row.try_get("budget_id")?,
        user_id: row.try_get("user_id")?,
        category_id: row.try_get("category_id")?,
        name: row.try_get("name")?,
        amount: row.try_get("amount")?,
        budget_type: parse_budget_type(row.try_get("budget_type")?)?,
        period_start_date: row.try_get("period_start_date")?,
        period_end_date: row.try_get("period_end_date")?,
    })
}

/// All budgets for a user with spent amounts derived in one query
///
/// The filtered sum only counts transactions whose type matches the
/// budget's type and whose date lies within the inclusive period; a
/// budget with no matching transactions reports zero, not null.
pub async fn list_budgets_with_spent(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<BudgetEntry>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT b.budget_id,
               b.name,
               b.category_id,
               c.name AS category_name,
               b.amount AS allocated_amount,
               b.budget_type,
               b.period_start_date,
               b.period_end_date,
               COALESCE(SUM(t.amount) FILTER (
                   WHERE t.type = b.budget_type
                     AND t.transaction_date >= b.period_start_date
                     AND t.transaction_date <= b.period_end_date
               ), 0) AS spent_amount
        FROM budgets b
        JOIN categories c ON c.category_id = b.category_id
        LEFT JOIN transactions t ON t.category_id = b.category_id
                                AND t.user_id = b.user_id
        WHERE b.user_id = $1
        GROUP BY b.budget_id, c.category_id
        ORDER BY b.period_start_date DESC, c.name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            Ok(BudgetEntry {
                budget_id: row.try_get("budget_id")?,
                name: row.try_get("name")?,
                category_id: row.try_get("category_id")?,
                category_name: row.try_get("category_name")?,
                allocated_amount: row.try_get("allocated_amount")?,
                spent_amount: row.try_get("spent_amount")?,
                start_date: row.try_get("period_start_date")?,
                end_date: row.try_get("period_end_date")?,
                budget_type: parse_budget_type(row.try_get("budget_type")?)?,
            })
        })
        .collect()
}

/// Sum of a user's transactions matching a budget's category, type, and
/// inclusive period
pub async fn spent_between(
    pool: &PgPool,
    user_id: i64,
    category_id: i64,
    kind: TransactionType,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Decimal, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COALESCE(SUM(amount), 0) AS spent_amount
        FROM transactions
        WHERE user_id = $1
          AND category_id = $2
          AND type = $3
          AND transaction_date >= $4
          AND transaction_date <= $5
        "#,
    )
    .bind(user_id)
    .bind(category_id)
    .bind(kind.as_str())
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;

    row.try_get("spent_amount")
}

/// Insert a budget for a user
pub async fn insert_budget(
    pool: &PgPool,
    user_id: i64,
    new: &NewBudget,
) -> Result<BudgetRecord, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO budgets
            (user_id, category_id, name, amount, budget_type, period_start_date, period_end_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING budget_id, user_id, category_id, name, amount, budget_type,
                  period_start_date, period_end_date
        "#,
    )
    .bind(user_id)
    .bind(new.category_id)
    .bind(&new.name)
    .bind(new.amount)
    .bind(new.budget_type.as_str())
    .bind(new.start_date)
    .bind(new.end_date)
    .fetch_one(pool)
    .await?;

    row_to_record(&row)
}

/// Apply a partial update, scoped to the owner
///
/// Returns `None` when the budget does not exist or belongs to another
/// user. Absent fields keep their stored values via COALESCE.
pub async fn update_budget(
    pool: &PgPool,
    user_id: i64,
    budget_id: i64,
    update: &BudgetUpdate,
) -> Result<Option<BudgetRecord>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE budgets
        SET name = COALESCE($1, name),
            category_id = COALESCE($2, category_id),
            amount = COALESCE($3, amount),
            budget_type = COALESCE($4, budget_type),
            period_start_date = COALESCE($5, period_start_date),
            period_end_date = COALESCE($6, period_end_date),
            updated_at = NOW()
        WHERE budget_id = $7 AND user_id = $8
        RETURNING budget_id, user_id, category_id, name, amount, budget_type,
                  period_start_date, period_end_date
        "#,
    )
    .bind(&update.name)
    .bind(update.category_id)
    .bind(update.amount)
    .bind(update.budget_type.map(|t| t.as_str()))
    .bind(update.start_date)
    .bind(update.end_date)
    .bind(budget_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_record).transpose()
}

/// Delete a budget, scoped to the owner
pub async fn delete_budget(
    pool: &PgPool,
    user_id: i64,
    budget_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM budgets
        WHERE budget_id = $1 AND user_id = $2
        "#,
    )
    .bind(budget_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Build the client-facing entry for one budget record
///
/// Re-derives the spent amount and joins the category name, using the
/// same predicate as the listing query.
pub async fn entry_for_record(
    pool: &PgPool,
    record: &BudgetRecord,
) -> Result<BudgetEntry, sqlx::Error> {
    let spent_amount = spent_between(
        pool,
        record.user_id,
        record.category_id,
        record.budget_type,
        record.period_start_date,
        record.period_end_date,
    )
    .await?;

    let category_name =
        crate::categories::db::category_name(pool, record.category_id).await?;

    Ok(BudgetEntry {
        budget_id: record.budget_id,
        name: record.name.clone(),
        category_id: record.category_id,
        category_name,
        allocated_amount: record.amount,
        spent_amount,
        start_date: record.period_start_date,
        end_date: record.period_end_date,
        budget_type: record.budget_type,
    })
}
