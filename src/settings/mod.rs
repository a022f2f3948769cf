//! Settings Module
//!
//! Per-user preferences stored on the user row: display name,
//! notification toggle, default currency.

pub mod db;
pub mod handlers;

pub use db::UserSettings;
