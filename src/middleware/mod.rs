//! Middleware Module
//!
//! Request processing shared by all protected routes:
//!
//! - **`auth`** - Bearer-token verification and caller identity extraction
//! - **`json`** - JSON body extraction with validation-style rejections

pub mod auth;
pub mod json;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
pub use json::ApiJson;
