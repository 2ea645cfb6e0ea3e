//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It carries the
//! domain taxonomy (`NotFound`, `CreateConflict`, `ValidationFailed`, `InternalError`) next to
//! transparent wrappers for infrastructure errors, and implements `IntoResponse` so handlers
//! can return it directly.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Failures surface to the direct caller and are never retried. Domain-specific errors like
/// `AuthError` handle their own response mapping.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Invariant broken inside the server, never caused by the caller.
    #[error(transparent)]
    InternalError(#[from] InternalError),

    /// Requested entity does not exist (or is no longer visible).
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Insert rejected because the record already exists.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    CreateConflict(String),

    /// Invalid input such as a bad page number or a counter the target does not track.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    ValidationFailed(String),
}

impl AppError {
    /// Translates a unique constraint violation into `CreateConflict`.
    ///
    /// Any other database error is wrapped unchanged.
    ///
    /// # Arguments
    /// - `err` - Error returned by an insert
    /// - `message` - Client-facing message used for the conflict
    pub fn from_insert(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::CreateConflict(message.into()),
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationFailed`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `CreateConflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::CreateConflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ValidationFailed(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
