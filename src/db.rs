use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::user::Role;

pub type DbPool = SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Default admin identity, created once on first startup.
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_NAME: &str = "Admin User";

/// The predefined boards every deployment starts with.
pub const DEFAULT_BOARDS: &[(&str, &str)] = &[
    ("Feature Requests", "Suggest new features and improvements for the product"),
    ("Integrations", "Request new integrations with other tools and services"),
    ("Design Suggestions", "Share your ideas for improving the product design"),
    ("UX Improvements", "Suggest ways to enhance the user experience"),
    ("General Feedback", "Share your general feedback and thoughts"),
];

pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Seed the admin user and the predefined boards. Idempotent: skips any part
/// that is already present, so it is safe to call on every startup.
pub async fn seed(pool: &DbPool, admin_password: &str) -> Result<(), AppError> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    if user_count == 0 {
        let hash = password::hash_password(admin_password)?;
        sqlx::query(
            "INSERT INTO users (email, name, role, password_hash, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(ADMIN_EMAIL)
        .bind(ADMIN_NAME)
        .bind(Role::Admin)
        .bind(hash)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        log::info!("Seeded admin user {ADMIN_EMAIL}");
    }

    let board_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
        .fetch_one(pool)
        .await?;

    if board_count == 0 {
        for (name, description) in DEFAULT_BOARDS {
            sqlx::query("INSERT INTO boards (name, description, created_at) VALUES (?1, ?2, ?3)")
                .bind(name)
                .bind(description)
                .bind(Utc::now())
                .execute(pool)
                .await?;
        }
        log::info!("Seeded {} default boards", DEFAULT_BOARDS.len());
    } else {
        log::info!("Database already seeded ({board_count} boards), skipping");
    }

    Ok(())
}
