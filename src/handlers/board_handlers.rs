use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::identity::AuthUser;
use crate::auth::validate;
use crate::domain::policy::{self, Action, Actor};
use crate::errors::AppError;
use crate::models::board;

#[derive(Debug, Deserialize)]
pub struct CreateBoardBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// GET /api/boards
/// Public: every board with its nested requests.
pub async fn list(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let boards = board::list_with_requests(&pool).await?;
    Ok(HttpResponse::Ok().json(boards))
}

/// POST /api/boards
/// Admin-only board creation.
pub async fn create(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    body: web::Json<CreateBoardBody>,
) -> Result<HttpResponse, AppError> {
    policy::require(
        Actor { id: actor.id, role: actor.role },
        None,
        Action::CreateBoard,
    )?;

    validate::required(&body.name, "Name", 100)?;

    let board = board::create(&pool, body.name.trim(), body.description.trim()).await?;
    Ok(HttpResponse::Ok().json(board))
}
