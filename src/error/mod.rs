//! Error Module
//!
//! Defines the crate-wide error taxonomy and its conversion to HTTP
//! responses. Every handler translates its failures into an [`ApiError`];
//! the `IntoResponse` implementation renders the error as a JSON body of
//! the form `{"message": "..."}` with the appropriate status code.
//!
//! # Module Structure
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation

pub mod conversion;
pub mod types;

pub use types::ApiError;
