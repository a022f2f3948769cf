//! Finca - Personal Finance Backend
//!
//! Finca is the REST backend for the Finca personal-finance client. Users
//! register and log in, record income and expense transactions against
//! categories, define budgets per category and period, and read aggregate
//! dashboard and report summaries.
//!
//! # Module Structure
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Registration, login, JWT token issuance and verification
//! - **`middleware`** - Bearer-token authentication and request extraction
//! - **`error`** - The crate-wide error taxonomy and HTTP conversion
//! - **`domain`** - Shared domain types (transaction type, amount parsing)
//! - **`transactions`**, **`budgets`**, **`categories`**, **`settings`**,
//!   **`dashboard`**, **`reports`** - Resource handlers and their queries
//!
//! # Request Flow
//!
//! Every protected request passes the auth middleware, which verifies the
//! bearer token and attaches the caller's identity to the request. Handlers
//! take the caller id only from that identity, run parameterized queries
//! against the PostgreSQL pool, and shape the JSON response. Errors are
//! translated to `ApiError` and rendered as `{"message": ...}` bodies.

/// Server configuration, state, and initialization
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: registration, login, tokens, user storage
pub mod auth;

/// Request middleware (bearer-token verification, JSON extraction)
pub mod middleware;

/// Crate-wide error types
pub mod error;

/// Shared domain types
pub mod domain;

/// Transaction CRUD
pub mod transactions;

/// Budgets with derived spent amounts
pub mod budgets;

/// Category listing
pub mod categories;

/// User settings
pub mod settings;

/// Dashboard summary aggregation
pub mod dashboard;

/// Report summary aggregation
pub mod reports;

pub use error::ApiError;
pub use server::state::AppState;
