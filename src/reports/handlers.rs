/**
 * Report HTTP Handler
 *
 * - `GET /api/reports/summary` - all-time income and expense totals plus
 *   per-category breakdowns ordered by total descending.
 */

use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::domain::TransactionType;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::reports::db::{self, CategoryTotal};

/// The report summary response
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_expenses: Decimal,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_source: Vec<CategoryTotal>,
}

/// Assemble the all-time report summary for the caller
pub async fn report_summary(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<ReportSummary>, ApiError> {
    let total_income = db::total_by_type(&pool, caller.user_id, TransactionType::Income).await?;
    let total_expenses =
        db::total_by_type(&pool, caller.user_id, TransactionType::Expense).await?;
    let expenses_by_category =
        db::totals_by_category(&pool, caller.user_id, TransactionType::Expense).await?;
    let income_by_source =
        db::totals_by_category(&pool, caller.user_id, TransactionType::Income).await?;

    Ok(Json(ReportSummary {
        total_income,
        total_expenses,
        expenses_by_category,
        income_by_source,
    }))
}
