use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::auth::identity::AuthUser;
use crate::auth::validate;
use crate::domain::list_view::{self, ListQuery, SortKey};
use crate::domain::policy::{self, Action, Actor};
use crate::errors::AppError;
use crate::models::request::{self, Category, NewRequest, Status, UpdateFields};
use crate::models::upvote::{self, ToggleOutcome};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub board_id: Option<i64>,
    pub status: Option<Status>,
    pub category: Option<Category>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub board_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequestBody {
    pub status: Option<Status>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

/// GET /api/requests?boardId=&status=&category=&search=&sort=
/// Board/category narrowing happens in SQL; search, status, and sort run
/// through the list view engine so the API and any client-side copy of the
/// view agree exactly.
pub async fn list(
    pool: web::Data<SqlitePool>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let requests = request::list(&pool, params.board_id, params.category).await?;

    let query = ListQuery {
        search: params.search.clone().unwrap_or_default(),
        status: params.status,
        sort: params.sort.unwrap_or_default(),
    };
    let view = list_view::filter_and_sort(&requests, &query);

    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/requests
/// Any authenticated user; status is forced to "open".
pub async fn create(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    body: web::Json<CreateRequestBody>,
) -> Result<HttpResponse, AppError> {
    validate::required(&body.title, "Title", 200)?;

    let created = request::create(
        &pool,
        &NewRequest {
            board_id: body.board_id,
            user_id: actor.id,
            title: body.title.trim().to_string(),
            description: body.description.trim().to_string(),
            category: body.category,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(created))
}

/// PATCH /api/requests/{id}
/// Status: admin or the request's author. Title/description/category: admin
/// only. Permission is checked against the existing row before any write.
pub async fn update(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    path: web::Path<i64>,
    body: web::Json<UpdateRequestBody>,
) -> Result<HttpResponse, AppError> {
    if body.status.is_none()
        && body.title.is_none()
        && body.description.is_none()
        && body.category.is_none()
    {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let id = path.into_inner();
    let existing = request::find_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Request"))?;

    let actor = Actor { id: actor.id, role: actor.role };
    if body.status.is_some() {
        policy::require(actor, Some(existing.user_id), Action::ChangeStatus)?;
    }
    if body.title.is_some() || body.description.is_some() || body.category.is_some() {
        policy::require(actor, Some(existing.user_id), Action::EditFields)?;
    }

    let updated = request::update(
        &pool,
        id,
        &UpdateFields {
            status: body.status,
            title: body.title.clone(),
            description: body.description.clone(),
            category: body.category,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// POST /api/requests/{id}/upvote
/// Toggle the caller's upvote. Returns the created row, or a removal message
/// when the toggle removed an existing upvote.
pub async fn upvote(
    pool: web::Data<SqlitePool>,
    actor: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if request::find_by_id(&pool, id).await?.is_none() {
        return Err(AppError::NotFound("Request"));
    }

    match upvote::toggle(&pool, id, actor.id).await? {
        ToggleOutcome::Added(row) => Ok(HttpResponse::Ok().json(row)),
        ToggleOutcome::Removed => {
            Ok(HttpResponse::Ok().json(json!({ "message": "Upvote removed" })))
        }
    }
}
