use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::auth::token::TokenKeys;
use crate::auth::{password, validate};
use crate::errors::AppError;
use crate::models::user::{self, NewUser, PublicUser, Role};

#[derive(Debug, Deserialize)]
pub struct GoogleLoginBody {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

/// POST /api/auth/google
/// Find-or-create a user from a federated identity, then issue a token.
pub async fn google(
    pool: web::Data<SqlitePool>,
    keys: web::Data<TokenKeys>,
    body: web::Json<GoogleLoginBody>,
) -> Result<HttpResponse, AppError> {
    validate::email(&body.email)?;
    validate::required(&body.name, "Name", 100)?;

    let email = body.email.trim();
    let user = match user::find_by_email(&pool, email).await? {
        Some(record) => record.into_public(),
        None => {
            user::create(
                &pool,
                &NewUser {
                    email: email.to_string(),
                    name: body.name.trim().to_string(),
                    role: Role::User,
                    password_hash: None,
                },
            )
            .await?
        }
    };

    let token = keys.issue(&user)?;
    Ok(HttpResponse::Ok().json(AuthResponse { user, token }))
}

/// POST /api/auth/signup
/// Password signup. 400 on malformed email, weak password, or duplicate email.
pub async fn signup(
    pool: web::Data<SqlitePool>,
    keys: web::Data<TokenKeys>,
    body: web::Json<SignupBody>,
) -> Result<HttpResponse, AppError> {
    validate::email(&body.email)?;
    validate::required(&body.name, "Name", 100)?;
    validate::password(&body.password)?;

    let email = body.email.trim();
    if user::find_by_email(&pool, email).await?.is_some() {
        return Err(AppError::Validation("Email already registered".to_string()));
    }

    let hash = password::hash_password(&body.password)?;
    let user = user::create(
        &pool,
        &NewUser {
            email: email.to_string(),
            name: body.name.trim().to_string(),
            role: Role::User,
            password_hash: Some(hash),
        },
    )
    .await?;

    let token = keys.issue(&user)?;
    Ok(HttpResponse::Ok().json(AuthResponse { user, token }))
}

/// POST /api/auth/login
/// Password login. 401 on unknown email or wrong password.
pub async fn login(
    pool: web::Data<SqlitePool>,
    keys: web::Data<TokenKeys>,
    body: web::Json<LoginBody>,
) -> Result<HttpResponse, AppError> {
    let record = user::find_by_email(&pool, body.email.trim())
        .await?
        .ok_or(AppError::BadCredentials)?;

    // Federated accounts have no password; they cannot password-login.
    let hash = record.password_hash.as_deref().ok_or(AppError::BadCredentials)?;
    if !password::verify_password(&body.password, hash)? {
        return Err(AppError::BadCredentials);
    }

    let user = record.into_public();
    let token = keys.issue(&user)?;
    Ok(HttpResponse::Ok().json(AuthResponse { user, token }))
}
