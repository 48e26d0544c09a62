use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::user::{PublicUser, Role};
use crate::models::{changelog, comment, upvote};

/// Request lifecycle status. Closed set; unknown values are rejected at the
/// serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Status {
    Open,
    Planned,
    InProgress,
    Completed,
    Declined,
}

/// Request tag. Closed set, same handling as `Status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Category {
    Feature,
    Bug,
    Improvement,
    Integration,
    Design,
    Ux,
    Feedback,
}

/// A feature request with everything the board UI renders: author, comments,
/// changelogs, and the upvote rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    pub id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub user: PublicUser,
    pub comments: Vec<comment::Comment>,
    pub changelogs: Vec<changelog::Changelog>,
    pub upvotes: Vec<upvote::Upvote>,
}

impl FeatureRequest {
    /// Ids of the users who currently upvote this request.
    pub fn upvoter_ids(&self) -> Vec<i64> {
        self.upvotes.iter().map(|u| u.user_id).collect()
    }
}

#[derive(Debug, Clone)]
pub struct NewRequest {
    pub board_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// Fields a PATCH may change. None means "leave as is".
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    pub status: Option<Status>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

#[derive(sqlx::FromRow)]
struct RequestRow {
    id: i64,
    board_id: i64,
    user_id: i64,
    title: String,
    description: String,
    status: Status,
    category: Category,
    created_at: DateTime<Utc>,
    author_email: String,
    author_name: String,
    author_role: Role,
    author_created_at: DateTime<Utc>,
}

const SELECT_REQUEST: &str =
    "SELECT r.id, r.board_id, r.user_id, r.title, r.description, r.status, r.category, \
            r.created_at, \
            u.email AS author_email, u.name AS author_name, u.role AS author_role, \
            u.created_at AS author_created_at \
     FROM requests r \
     JOIN users u ON u.id = r.user_id";

async fn hydrate(pool: &SqlitePool, row: RequestRow) -> Result<FeatureRequest, AppError> {
    let comments = comment::find_for_request(pool, row.id).await?;
    let changelogs = changelog::find_for_request(pool, row.id).await?;
    let upvotes = upvote::find_for_request(pool, row.id).await?;

    Ok(FeatureRequest {
        id: row.id,
        board_id: row.board_id,
        user_id: row.user_id,
        title: row.title,
        description: row.description,
        status: row.status,
        category: row.category,
        created_at: row.created_at,
        user: PublicUser {
            id: row.user_id,
            email: row.author_email,
            name: row.author_name,
            role: row.author_role,
            created_at: row.author_created_at,
        },
        comments,
        changelogs,
        upvotes,
    })
}

/// List requests, newest first, optionally narrowed to a board and category.
/// Search/status/sort refinement happens in `domain::list_view`, not here.
pub async fn list(
    pool: &SqlitePool,
    board_id: Option<i64>,
    category: Option<Category>,
) -> Result<Vec<FeatureRequest>, AppError> {
    let sql = format!(
        "{SELECT_REQUEST} \
         WHERE (?1 IS NULL OR r.board_id = ?1) \
           AND (?2 IS NULL OR r.category = ?2) \
         ORDER BY r.created_at DESC, r.id DESC"
    );

    let rows = sqlx::query_as::<_, RequestRow>(&sql)
        .bind(board_id)
        .bind(category)
        .fetch_all(pool)
        .await?;

    let mut requests = Vec::with_capacity(rows.len());
    for row in rows {
        requests.push(hydrate(pool, row).await?);
    }
    Ok(requests)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<FeatureRequest>, AppError> {
    let sql = format!("{SELECT_REQUEST} WHERE r.id = ?1");
    let row = sqlx::query_as::<_, RequestRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Create a request on a board. Status is always `open` regardless of caller
/// input. Fails with NotFound when the board does not exist.
pub async fn create(pool: &SqlitePool, new_request: &NewRequest) -> Result<FeatureRequest, AppError> {
    let board_exists: bool = sqlx::query_scalar("SELECT COUNT(*) > 0 FROM boards WHERE id = ?1")
        .bind(new_request.board_id)
        .fetch_one(pool)
        .await?;
    if !board_exists {
        return Err(AppError::NotFound("Board"));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO requests (board_id, user_id, title, description, status, category, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
         RETURNING id",
    )
    .bind(new_request.board_id)
    .bind(new_request.user_id)
    .bind(&new_request.title)
    .bind(&new_request.description)
    .bind(Status::Open)
    .bind(new_request.category)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id).await?.ok_or(AppError::NotFound("Request"))
}

/// Merge the provided fields into an existing request. Authorization is the
/// caller's job; this only persists.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: &UpdateFields,
) -> Result<FeatureRequest, AppError> {
    let changed = sqlx::query(
        "UPDATE requests SET \
             status = COALESCE(?2, status), \
             title = COALESCE(?3, title), \
             description = COALESCE(?4, description), \
             category = COALESCE(?5, category) \
         WHERE id = ?1",
    )
    .bind(id)
    .bind(fields.status)
    .bind(&fields.title)
    .bind(&fields.description)
    .bind(fields.category)
    .execute(pool)
    .await?;

    if changed.rows_affected() == 0 {
        return Err(AppError::NotFound("Request"));
    }

    find_by_id(pool, id).await?.ok_or(AppError::NotFound("Request"))
}
