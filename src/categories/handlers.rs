/**
 * Category HTTP Handlers
 *
 * - `GET /api/categories` - global categories plus the caller's own
 */

use axum::extract::State;
use axum::Json;
use sqlx::PgPool;

use crate::categories::db::{self, Category};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// List the categories visible to the caller
pub async fn list_categories(
    State(pool): State<PgPool>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = db::list_visible_categories(&pool, caller.user_id).await?;
    Ok(Json(categories))
}
