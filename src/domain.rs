//! Shared domain types
//!
//! Types used across the resource modules: the income/expense distinction
//! and the amount parsing rule (exact-precision decimals, transmitted as
//! strings, rejected before storage when malformed or negative).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;

/// Transaction direction
///
/// Applies to transactions, categories, and budgets alike. Stored in the
/// database as lowercase text with a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(ApiError::validation(format!(
                "Invalid type '{}': must be 'income' or 'expense'.",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a monetary amount from its wire representation
///
/// Amounts travel as decimal strings to avoid floating-point drift in
/// transit. Anything that does not parse as a decimal, or that is
/// negative, is rejected before reaching storage.
pub fn parse_amount(raw: &str) -> Result<Decimal, ApiError> {
    let amount = Decimal::from_str(raw.trim())
        .map_err(|_| ApiError::validation(format!("Invalid amount format: '{}'.", raw)))?;
    if amount.is_sign_negative() {
        return Err(ApiError::validation("Amount must not be negative."));
    }
    Ok(amount)
}
