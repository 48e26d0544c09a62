use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// No bearer token on a protected route.
    Unauthenticated,
    /// Login failed; deliberately does not say which part was wrong.
    BadCredentials,
    /// Token present but unverifiable (bad signature, expired).
    InvalidToken,
    /// Authenticated but lacking role/ownership for the action.
    Forbidden(String),
    /// Referenced entity does not exist; carries the entity kind.
    NotFound(&'static str),
    Validation(String),
    Db(sqlx::Error),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated => write!(f, "Authentication required"),
            AppError::BadCredentials => write!(f, "Invalid email or password"),
            AppError::InvalidToken => write!(f, "Invalid token"),
            AppError::Forbidden(msg) => write!(f, "{msg}"),
            AppError::NotFound(what) => write!(f, "{what} not found"),
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Internal(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated | AppError::BadCredentials => {
                HttpResponse::Unauthorized().json(json!({ "error": self.to_string() }))
            }
            AppError::InvalidToken | AppError::Forbidden(_) => {
                HttpResponse::Forbidden().json(json!({ "error": self.to_string() }))
            }
            AppError::NotFound(_) => {
                HttpResponse::NotFound().json(json!({ "error": self.to_string() }))
            }
            AppError::Validation(_) => {
                HttpResponse::BadRequest().json(json!({ "error": self.to_string() }))
            }
            AppError::Db(_) | AppError::Internal(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        AppError::InvalidToken
    }
}
