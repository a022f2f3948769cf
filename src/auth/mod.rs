//! Authentication Module
//!
//! Registration, login, JWT token issuance and verification, and user
//! database operations.
//!
//! # Module Structure
//!
//! - **`tokens`** - Signed session tokens (issue, verify, identity claims)
//! - **`users`** - User model and database operations
//! - **`handlers`** - HTTP handlers for register and login

pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::{login, register};
pub use tokens::{Claims, TokenKeys};
