//! Database operations for categories

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::TransactionType;

/// A category visible to a user
///
/// `user_id` is `None` for global categories shared by everyone.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub user_id: Option<i64>,
}

fn row_to_category(row: &PgRow) -> Result<Category, sqlx::Error> {
    let kind: String = row.try_get("type")?;
    let kind = kind.parse::<TransactionType>().map_err(|_| {
        sqlx::Error::Decode(format!("unrecognized category type: {}", kind).into())
    })?;

    Ok(Category {
        category_id: row.try_get("category_id")?,
        name: row.try_get("name")?,
        kind,
        user_id: row.try_get("user_id")?,
    })
}

/// Global categories plus the user's own, ordered by type then name
pub async fn list_visible_categories(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<Category>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT category_id, name, type, user_id
        FROM categories
        WHERE user_id IS NULL OR user_id = $1
        ORDER BY type, name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_category).collect()
}

/// Display name of a category, if it exists
pub async fn category_name(pool: &PgPool, category_id: i64) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT name FROM categories WHERE category_id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.get("name")))
}
