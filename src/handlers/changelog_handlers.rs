use actix_web::{HttpResponse, web};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::auth::identity::AuthUser;
use crate::auth::validate;
use crate::domain::policy::{self, Action, Actor};
use crate::errors::AppError;
use crate::models::changelog;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChangelogBody {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub request_id: i64,
}

/// POST /api/changelogs
/// Admin-only update note attached to a request.
pub async fn create(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    body: web::Json<CreateChangelogBody>,
) -> Result<HttpResponse, AppError> {
    policy::require(
        Actor { id: actor.id, role: actor.role },
        None,
        Action::AddChangelog,
    )?;

    validate::required(&body.title, "Title", 200)?;

    let created = changelog::create(
        &pool,
        body.request_id,
        body.title.trim(),
        body.content.trim(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(created))
}
