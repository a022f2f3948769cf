//! Authentication HTTP Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`types`** - Request and response bodies shared by both

pub mod login;
pub mod register;
pub mod types;

pub use login::login;
pub use register::register;
