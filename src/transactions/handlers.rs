/**
 * Transaction HTTP Handlers
 *
 * - `GET    /api/transactions`      - list the caller's transactions
 * - `POST   /api/transactions`      - record a transaction
 * - `PUT    /api/transactions/{id}` - replace a transaction
 * - `DELETE /api/transactions/{id}` - delete a transaction
 *
 * Mutations are scoped to the caller; a missing row and a foreign row both
 * yield 404. Amounts arrive as decimal strings and are validated before
 * any write.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::categories;
use crate::domain::{parse_amount, TransactionType};
use crate::error::types::SQLSTATE_FOREIGN_KEY_VIOLATION;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::json::ApiJson;
use crate::transactions::db::{self, NewTransaction, Transaction};

/// Request body for creating or replacing a transaction
///
/// Required fields are optional here and checked in [`Self::validate`] so
/// a missing field produces a 400 with a readable message.
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    pub category_id: Option<i64>,
    pub amount: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub transaction_date: Option<String>,
    pub notes: Option<String>,
    pub attachment_url: Option<String>,
}

impl TransactionPayload {
    /// Validate required fields and parse the typed values
    pub fn validate(self) -> Result<NewTransaction, ApiError> {
        let missing = || {
            ApiError::validation(
                "Missing required transaction fields: category_id, amount, type, transaction_date.",
            )
        };

        let category_id = self.category_id.ok_or_else(missing)?;
        let amount = parse_amount(&self.amount.ok_or_else(missing)?)?;
        let kind = self.kind.ok_or_else(missing)?.parse::<TransactionType>()?;
        let raw_date = self.transaction_date.ok_or_else(missing)?;
        let transaction_date = chrono::NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
            .map_err(|_| {
                ApiError::validation(format!(
                    "Invalid transaction_date '{}': expected YYYY-MM-DD.",
                    raw_date
                ))
            })?;

        Ok(NewTransaction {
            category_id,
            amount,
            kind,
            transaction_date,
            notes: self.notes,
            attachment_url: self.attachment_url,
        })
    }
}

/// List the caller's transactions
pub async fn list_transactions(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = db::list_transactions(&pool, caller.user_id).await?;
    Ok(Json(transactions))
}

/// Record a new transaction
pub async fn create_transaction(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    ApiJson(payload): ApiJson<TransactionPayload>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let new = payload.validate()?;

    let mut transaction = db::insert_transaction(&pool, caller.user_id, &new)
        .await
        .map_err(map_write_error)?;
    transaction.category_name = categories::db::category_name(&pool, new.category_id).await?;

    tracing::info!(
        "Transaction {} created for user {}",
        transaction.transaction_id,
        caller.user_id
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Replace an existing transaction
pub async fn update_transaction(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    Path(transaction_id): Path<i64>,
    ApiJson(payload): ApiJson<TransactionPayload>,
) -> Result<Json<Transaction>, ApiError> {
    let new = payload.validate()?;

    let mut transaction = db::update_transaction(&pool, caller.user_id, transaction_id, &new)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| ApiError::not_found("Transaction not found."))?;
    transaction.category_name = categories::db::category_name(&pool, new.category_id).await?;

    Ok(Json(transaction))
}

/// Delete a transaction
pub async fn delete_transaction(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
    Path(transaction_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = db::delete_transaction(&pool, caller.user_id, transaction_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Transaction not found."));
    }

    tracing::info!(
        "Transaction {} deleted for user {}",
        transaction_id,
        caller.user_id
    );

    Ok(Json(serde_json::json!({
        "message": "Transaction deleted successfully."
    })))
}

/// Map constraint violations on writes to client errors
fn map_write_error(err: sqlx::Error) -> ApiError {
    if ApiError::sqlstate(&err).as_deref() == Some(SQLSTATE_FOREIGN_KEY_VIOLATION) {
        ApiError::validation("Invalid category reference.")
    } else {
        err.into()
    }
}
