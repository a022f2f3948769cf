//! Budgets Module
//!
//! Budgets allocate an amount to a category over an inclusive calendar
//! period. The spent (or achieved, for income budgets) amount is never
//! stored: it is re-derived on every read by summing the owner's
//! transactions of the budget's type and category whose date falls within
//! the period. Budgets therefore always reflect current transaction state
//! with no invalidation logic.

pub mod db;
pub mod handlers;

pub use db::BudgetEntry;
