use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::identity::AuthUser;
use crate::auth::validate;
use crate::errors::AppError;
use crate::models::comment;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentBody {
    pub text: String,
    pub request_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CommentTextBody {
    pub text: String,
}

async fn append(
    pool: &SqlitePool,
    actor: &AuthUser,
    request_id: i64,
    text: &str,
) -> Result<HttpResponse, AppError> {
    validate::required(text, "Text", 2000)?;

    let created = comment::create(pool, request_id, actor.id, text.trim()).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// POST /api/comments
/// Body carries the request id.
pub async fn create(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    body: web::Json<CreateCommentBody>,
) -> Result<HttpResponse, AppError> {
    append(&pool, &actor, body.request_id, &body.text).await
}

/// POST /api/requests/{id}/comments
/// Same append, request id in the path.
pub async fn create_for_request(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    path: web::Path<i64>,
    body: web::Json<CommentTextBody>,
) -> Result<HttpResponse, AppError> {
    append(&pool, &actor, path.into_inner(), &body.text).await
}
