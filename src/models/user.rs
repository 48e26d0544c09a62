use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// User as exposed over the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Full user row, including the credential column. Internal only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn into_public(self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    /// None for federated (Google) logins, Some for password signups.
    pub password_hash: Option<String>,
}

pub async fn create(pool: &SqlitePool, new_user: &NewUser) -> Result<PublicUser, AppError> {
    let user = sqlx::query_as::<_, PublicUser>(
        "INSERT INTO users (email, name, role, password_hash, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING id, email, name, role, created_at",
    )
    .bind(&new_user.email)
    .bind(&new_user.name)
    .bind(new_user.role)
    .bind(&new_user.password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<UserRecord>, AppError> {
    let user = sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, name, role, password_hash, created_at FROM users WHERE email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_public_by_id(pool: &SqlitePool, id: i64) -> Result<Option<PublicUser>, AppError> {
    let user = sqlx::query_as::<_, PublicUser>(
        "SELECT id, email, name, role, created_at FROM users WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
