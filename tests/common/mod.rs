//! Shared test infrastructure: a temp-file SQLite database with the schema
//! applied, plus fixture helpers used across the model and API tests.

use tempfile::TempDir;

use reqboard::auth::password;
use reqboard::db::{self, DbPool};
use reqboard::errors::AppError;
use reqboard::models::request::{self, Category, FeatureRequest, NewRequest};
use reqboard::models::user::{NewUser, PublicUser, Role};

/// Owns the temp directory so the database file outlives the pool.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub async fn setup_test_db() -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = db::init_pool(db_path.to_str().expect("utf-8 temp path"))
        .await
        .expect("Failed to open test DB");
    db::run_migrations(&pool).await.expect("Failed to run migrations");

    TestDb { _dir: dir, pool }
}

/// Create a user with a hashed password, returning the public view.
pub async fn create_test_user(
    pool: &DbPool,
    email: &str,
    name: &str,
    role: Role,
) -> Result<PublicUser, AppError> {
    let hash = password::hash_password("password123").expect("hash");
    reqboard::models::user::create(
        pool,
        &NewUser {
            email: email.to_string(),
            name: name.to_string(),
            role,
            password_hash: Some(hash),
        },
    )
    .await
}

pub async fn create_test_board(pool: &DbPool, name: &str) -> i64 {
    reqboard::models::board::create(pool, name, "test board")
        .await
        .expect("create board")
        .id
}

pub async fn create_test_request(
    pool: &DbPool,
    board_id: i64,
    user_id: i64,
    title: &str,
) -> FeatureRequest {
    request::create(
        pool,
        &NewRequest {
            board_id,
            user_id,
            title: title.to_string(),
            description: format!("description of {title}"),
            category: Category::Feature,
        },
    )
    .await
    .expect("create request")
}
