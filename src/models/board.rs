use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::request::{self, FeatureRequest};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Board plus its requests, the shape `GET /api/boards` returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardWithRequests {
    #[serde(flatten)]
    pub board: Board,
    pub requests: Vec<FeatureRequest>,
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Board>, AppError> {
    let boards = sqlx::query_as::<_, Board>(
        "SELECT id, name, description, created_at FROM boards ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(boards)
}

pub async fn list_with_requests(pool: &SqlitePool) -> Result<Vec<BoardWithRequests>, AppError> {
    let boards = list(pool).await?;

    let mut out = Vec::with_capacity(boards.len());
    for board in boards {
        let requests = request::list(pool, Some(board.id), None).await?;
        out.push(BoardWithRequests { board, requests });
    }
    Ok(out)
}

pub async fn create(pool: &SqlitePool, name: &str, description: &str) -> Result<Board, AppError> {
    let board = sqlx::query_as::<_, Board>(
        "INSERT INTO boards (name, description, created_at) VALUES (?1, ?2, ?3) \
         RETURNING id, name, description, created_at",
    )
    .bind(name)
    .bind(description)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(board)
}
