/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses. Handlers return
 * `Result<_, ApiError>` and the error is rendered as JSON:
 *
 * ```json
 * { "message": "Invalid email or password." }
 * ```
 *
 * Clients display the message directly or substitute a localized fallback.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {:?}", self);
        }

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
