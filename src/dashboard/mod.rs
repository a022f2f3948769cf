//! Dashboard Module
//!
//! The summary the client renders on its home screen: all-time balance,
//! the five most recent transactions, and a glance at up to three budgets.

pub mod db;
pub mod handlers;

pub use handlers::DashboardSummary;
