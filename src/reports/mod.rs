//! Reports Module
//!
//! All-time totals and per-category breakdowns. No time-range parameter
//! is exposed; the report always covers the user's full history.

pub mod db;
pub mod handlers;

pub use handlers::ReportSummary;
