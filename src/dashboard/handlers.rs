/**
 * Dashboard HTTP Handler
 *
 * - `GET /api/dashboard/summary` - balance, recent transactions, and a
 *   budget overview in one response. Keys are camelCase to match the
 *   client contract.
 */

use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::dashboard::db::{self, BudgetStatus, RecentTransaction};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// The dashboard summary response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    pub recent_transactions: Vec<RecentTransaction>,
    pub budget_overview: Vec<BudgetStatus>,
}

/// Assemble the dashboard summary for the caller
pub async fn dashboard_summary(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<DashboardSummary>, ApiError> {
    let balance = db::balance(&pool, caller.user_id).await?;
    let recent_transactions = db::recent_transactions(&pool, caller.user_id).await?;
    let budget_overview = db::budget_overview(&pool, caller.user_id).await?;

    Ok(Json(DashboardSummary {
        balance,
        recent_transactions,
        budget_overview,
    }))
}
