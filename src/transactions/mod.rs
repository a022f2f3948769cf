//! Transactions Module
//!
//! CRUD for income/expense transactions. Every operation is scoped to the
//! authenticated caller; a transaction owned by another user behaves as if
//! it does not exist.

pub mod db;
pub mod handlers;

pub use db::Transaction;
