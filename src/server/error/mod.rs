//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod query;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, query::QueryError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `QueryError` handle their own response mapping, while generic variants provide
/// standard HTTP status codes.
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

    /// Invalid filter or sort clause, detected before any query is executed.
    #[error(transparent)]
    QueryErr(#[from] QueryError),

    /// Database operation error from SeaORM.
    ///
    /// Unique and foreign key constraint violations result in 409 Conflict, anything
    /// else in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, including payload validation failures.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with the current state of a resource.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds the structured not-found error used by every entity family.
    ///
    /// # Arguments
    /// - `label` - Human readable entity name, e.g. `Agreement`
    /// - `id` - Identifier that did not resolve to an active row
    pub fn not_found(label: &str, id: i32) -> Self {
        Self::NotFound(format!("{} #{} not found!", label, id))
    }

    /// Maps a unique constraint violation to a 409 naming the duplicated value.
    ///
    /// Any other database error is passed through unchanged.
    pub fn conflict_on_duplicate(err: DbErr, label: &str, value: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Self::Conflict(format!("{} {} already exists!", label, value))
            }
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `QueryErr`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` and constraint violations reported by the database
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::QueryErr(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: err.to_string() })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            error: "Resource already exists!".to_string(),
                        }),
                    )
                        .into_response()
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key constraint violation: {}", detail);
                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            error: "Resource is still referenced by other records!".to_string(),
                        }),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
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
