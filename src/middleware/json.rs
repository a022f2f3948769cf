/**
 * JSON Body Extraction
 *
 * A thin wrapper over `axum::Json` that maps body rejections (missing
 * body, wrong field types, syntax errors) to the crate's 400 validation
 * error, so every malformed request carries a `{"message": ...}` body
 * like any other input failure.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::ApiError;

/// JSON extractor with a validation-style rejection
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}
