use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::user::{PublicUser, Role};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub request_id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user: PublicUser,
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    request_id: i64,
    user_id: i64,
    text: String,
    created_at: DateTime<Utc>,
    author_email: String,
    author_name: String,
    author_role: Role,
    author_created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            request_id: self.request_id,
            user_id: self.user_id,
            text: self.text,
            created_at: self.created_at,
            user: PublicUser {
                id: self.user_id,
                email: self.author_email,
                name: self.author_name,
                role: self.author_role,
                created_at: self.author_created_at,
            },
        }
    }
}

const SELECT_COMMENT: &str =
    "SELECT c.id, c.request_id, c.user_id, c.text, c.created_at, \
            u.email AS author_email, u.name AS author_name, u.role AS author_role, \
            u.created_at AS author_created_at \
     FROM comments c \
     JOIN users u ON u.id = c.user_id";

/// Comments for a request, oldest first (append order).
pub async fn find_for_request(pool: &SqlitePool, request_id: i64) -> Result<Vec<Comment>, AppError> {
    let sql = format!("{SELECT_COMMENT} WHERE c.request_id = ?1 ORDER BY c.created_at ASC, c.id ASC");
    let rows = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(request_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(CommentRow::into_comment).collect())
}

/// Append a comment. Fails with NotFound when the request does not exist.
pub async fn create(
    pool: &SqlitePool,
    request_id: i64,
    user_id: i64,
    text: &str,
) -> Result<Comment, AppError> {
    let request_exists: bool = sqlx::query_scalar("SELECT COUNT(*) > 0 FROM requests WHERE id = ?1")
        .bind(request_id)
        .fetch_one(pool)
        .await?;
    if !request_exists {
        return Err(AppError::NotFound("Request"));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO comments (request_id, user_id, text, created_at) \
         VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(request_id)
    .bind(user_id)
    .bind(text)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let sql = format!("{SELECT_COMMENT} WHERE c.id = ?1");
    let row = sqlx::query_as::<_, CommentRow>(&sql)
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(row.into_comment())
}
