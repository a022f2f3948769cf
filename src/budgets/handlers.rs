/**
 * Budget HTTP Handlers
 *
 * - `GET    /api/budgets`      - list with derived spent amounts
 * - `POST   /api/budgets`      - create (409 on duplicate, 400 on bad category)
 * - `PUT    /api/budgets/{id}` - partial update via a fixed field set
 * - `DELETE /api/budgets/{id}` - delete
 *
 * Create and update responses carry the freshly derived `spent_amount`;
 * a brand-new budget may already have matching transactions in range.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::budgets::db::{self, BudgetEntry, BudgetUpdate, NewBudget};
use crate::domain::{parse_amount, TransactionType};
use crate::error::types::{SQLSTATE_FOREIGN_KEY_VIOLATION, SQLSTATE_UNIQUE_VIOLATION};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ApiJson;

/// Request body for creating a budget
#[derive(Debug, Deserialize)]
pub struct NewBudgetPayload {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub amount: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget_type: Option<String>,
}

/// Request body for a partial budget update
#[derive(Debug, Deserialize, Default)]
pub struct BudgetUpdatePayload {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub amount: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget_type: Option<String>,
}

fn parse_date(raw: &str, field: &str) -> Result<chrono::NaiveDate, ApiError> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        ApiError::validation(format!("Invalid {} '{}': expected YYYY-MM-DD.", field, raw))
    })
}

impl NewBudgetPayload {
    /// Validate required fields and parse the typed values
    pub fn validate(self) -> Result<NewBudget, ApiError> {
        let missing = || {
            ApiError::validation(
                "Missing required fields: name, category_id, amount, start_date, end_date, budget_type.",
            )
        };

        let name = self.name.filter(|n| !n.trim().is_empty()).ok_or_else(missing)?;
        let category_id = self.category_id.ok_or_else(missing)?;
        let amount = parse_amount(&self.amount.ok_or_else(missing)?)?;
        let start_date = parse_date(&self.start_date.ok_or_else(missing)?, "start_date")?;
        let end_date = parse_date(&self.end_date.ok_or_else(missing)?, "end_date")?;
        let budget_type = self
            .budget_type
            .ok_or_else(missing)?
            .parse::<TransactionType>()?;

        if end_date < start_date {
            return Err(ApiError::validation(
                "end_date must not be before start_date.",
            ));
        }

        Ok(NewBudget {
            name,
            category_id,
            amount,
            budget_type,
            start_date,
            end_date,
        })
    }
}

impl BudgetUpdatePayload {
    /// Parse the present fields; reject an update carrying none
    pub fn validate(self) -> Result<BudgetUpdate, ApiError> {
        let update = BudgetUpdate {
            name: self.name,
            category_id: self.category_id,
            amount: self.amount.as_deref().map(parse_amount).transpose()?,
            budget_type: self
                .budget_type
                .as_deref()
                .map(|t| t.parse::<TransactionType>())
                .transpose()?,
            start_date: self
                .start_date
                .as_deref()
                .map(|d| parse_date(d, "start_date"))
                .transpose()?,
            end_date: self
                .end_date
                .as_deref()
                .map(|d| parse_date(d, "end_date"))
                .transpose()?,
        };

        if update.is_empty() {
            return Err(ApiError::validation("No fields provided for update."));
        }

        Ok(update)
    }
}

/// List the caller's budgets with derived spent amounts
pub async fn list_budgets(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<BudgetEntry>>, ApiError> {
    let budgets = db::list_budgets_with_spent(&pool, caller.user_id).await?;
    Ok(Json(budgets))
}

/// Create a budget
pub async fn create_budget(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    ApiJson(payload): ApiJson<NewBudgetPayload>,
) -> Result<(StatusCode, Json<BudgetEntry>), ApiError> {
    let new = payload.validate()?;

    let record = db::insert_budget(&pool, caller.user_id, &new)
        .await
        .map_err(map_write_error)?;
    let entry = db::entry_for_record(&pool, &record).await?;

    tracing::info!(
        "Budget {} created for user {}",
        record.budget_id,
        caller.user_id
    );

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Partially update a budget
pub async fn update_budget(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    Path(budget_id): Path<i64>,
    ApiJson(payload): ApiJson<BudgetUpdatePayload>,
) -> Result<Json<BudgetEntry>, ApiError> {
    let update = payload.validate()?;

    let record = db::update_budget(&pool, caller.user_id, budget_id, &update)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| ApiError::not_found("Budget not found."))?;
    let entry = db::entry_for_record(&pool, &record).await?;

    Ok(Json(entry))
}

/// Delete a budget
pub async fn delete_budget(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    Path(budget_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = db::delete_budget(&pool, caller.user_id, budget_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Budget not found."));
    }

    tracing::info!("Budget {} deleted for user {}", budget_id, caller.user_id);

    Ok(Json(serde_json::json!({
        "message": "Budget deleted successfully."
    })))
}

/// Map constraint violations on writes to client errors
fn map_write_error(err: sqlx::Error) -> ApiError {
    match ApiError::sqlstate(&err).as_deref() {
        Some(SQLSTATE_UNIQUE_VIOLATION) => ApiError::conflict(
            "A budget for this category, type, and start date already exists.",
        ),
        Some(SQLSTATE_FOREIGN_KEY_VIOLATION) => ApiError::validation("Invalid category ID."),
        _ => err.into(),
    }
}
