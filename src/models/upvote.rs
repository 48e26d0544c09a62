use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Upvote {
    pub id: i64,
    pub request_id: i64,
    pub user_id: i64,
}

/// What a toggle did to the store.
#[derive(Debug, Clone)]
pub enum ToggleOutcome {
    Added(Upvote),
    Removed,
}

pub async fn find_for_request(pool: &SqlitePool, request_id: i64) -> Result<Vec<Upvote>, AppError> {
    let rows = sqlx::query_as::<_, Upvote>(
        "SELECT id, request_id, user_id FROM upvotes WHERE request_id = ?1 ORDER BY id ASC",
    )
    .bind(request_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Persisted upvote toggle. Attempts the insert; a violation of the
/// (user_id, request_id) uniqueness constraint means the user already
/// upvoted, so the row is deleted instead. The store's own atomicity on the
/// constrained insert is what arbitrates concurrent toggles.
pub async fn toggle(
    pool: &SqlitePool,
    request_id: i64,
    user_id: i64,
) -> Result<ToggleOutcome, AppError> {
    let inserted = sqlx::query_as::<_, Upvote>(
        "INSERT INTO upvotes (request_id, user_id) VALUES (?1, ?2) \
         RETURNING id, request_id, user_id",
    )
    .bind(request_id)
    .bind(user_id)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok(row) => Ok(ToggleOutcome::Added(row)),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            sqlx::query("DELETE FROM upvotes WHERE request_id = ?1 AND user_id = ?2")
                .bind(request_id)
                .bind(user_id)
                .execute(pool)
                .await?;
            Ok(ToggleOutcome::Removed)
        }
        Err(e) => Err(e.into()),
    }
}
