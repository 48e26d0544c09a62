use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Changelog {
    pub id: i64,
    pub request_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Changelog entries for a request, oldest first.
pub async fn find_for_request(
    pool: &SqlitePool,
    request_id: i64,
) -> Result<Vec<Changelog>, AppError> {
    let entries = sqlx::query_as::<_, Changelog>(
        "SELECT id, request_id, title, content, created_at FROM changelogs \
         WHERE request_id = ?1 ORDER BY created_at ASC, id ASC",
    )
    .bind(request_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Append a changelog entry. Fails with NotFound when the request does not
/// exist. Admin gating happens in the handler.
pub async fn create(
    pool: &SqlitePool,
    request_id: i64,
    title: &str,
    content: &str,
) -> Result<Changelog, AppError> {
    let request_exists: bool = sqlx::query_scalar("SELECT COUNT(*) > 0 FROM requests WHERE id = ?1")
        .bind(request_id)
        .fetch_one(pool)
        .await?;
    if !request_exists {
        return Err(AppError::NotFound("Request"));
    }

    let entry = sqlx::query_as::<_, Changelog>(
        "INSERT INTO changelogs (request_id, title, content, created_at) \
         VALUES (?1, ?2, ?3, ?4) \
         RETURNING id, request_id, title, content, created_at",
    )
    .bind(request_id)
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(entry)
}
