//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod dispatch;
pub mod schedule;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{dispatch::DispatchError, schedule::ScheduleError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `DispatchError` and `ScheduleError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required environment variable is not set.
    ///
    /// Raised during startup configuration only; see `.env.example` for the
    /// variables the application reads. Variable names are compile-time
    /// constants, hence `&'static str`.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Dispatch failure: target not found, unknown method, or the invoked
    /// method itself failed. Delegates to `DispatchError::into_response()`
    /// to preserve the three-way classification.
    #[error(transparent)]
    DispatchErr(#[from] DispatchError),

    /// Schedule persistence failure, including storage constraint violations.
    #[error(transparent)]
    ScheduleErr(#[from] ScheduleError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Dispatch and schedule errors delegate to their own response handling, while other
/// errors use standard mappings. Internal errors are logged with full details but
/// return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
/// - Variable - For `DispatchErr` / `ScheduleErr`, delegated to their `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::DispatchErr(err) => err.into_response(),
            Self::ScheduleErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
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
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
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
