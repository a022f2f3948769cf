//! Categories Module
//!
//! Read-only reference data: global categories (no owner) plus the
//! caller's own. Categories are seeded by migration and not created or
//! edited through the API.

pub mod db;
pub mod handlers;

pub use db::Category;
