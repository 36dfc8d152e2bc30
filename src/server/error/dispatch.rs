use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        dispatch::Category,
        error::{schedule::ScheduleError, InternalServerError},
    },
};

/// Failures of a generic method invocation.
///
/// The classification is three-way and must survive to the boundary: the
/// target was not found, the method name is unknown, or the method itself
/// failed. All are terminal for the call; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No entity of this category matches the supplied key.
    #[error("{0} not found")]
    NotFound(Category),

    /// The entity exists but exposes no method under this name.
    #[error("Function {method} not found on {category}")]
    MethodNotFound { category: Category, method: String },

    /// The method was found and invoked, and failed on its own. The original
    /// failure detail is forwarded, never masked.
    #[error("Error invoking function {method} on {category}: {source}")]
    Invocation {
        category: Category,
        method: String,
        #[source]
        source: InvocationError,
    },

    /// The resolver lookup itself failed at the database.
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Failure produced by an invoked method.
///
/// Arguments are applied positionally with no shape validation before the
/// call, so mismatched arguments surface here rather than as a dispatch-level
/// rejection.
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("method {method} missing argument at position {index}")]
    MissingArgument { method: &'static str, index: usize },

    #[error("method {method} expected {expected} at position {index}")]
    InvalidArgument {
        method: &'static str,
        index: usize,
        expected: &'static str,
    },

    /// The method persisted or loaded a schedule and the repository failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// The method's return value could not be serialized.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Converts dispatch errors into HTTP responses.
///
/// The three-way classification maps onto status codes; the body always
/// carries the specific message so the caller can distinguish failures.
///
/// # Returns
/// - 404 Not Found - Target entity not found
/// - 400 Bad Request - Unknown method name
/// - 500 Internal Server Error - Invocation failure (detail in the body) or
///   database error during resolution (generic body)
impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::MethodNotFound { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Invocation { .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Db(err) => InternalServerError(err).into_response(),
        }
    }
}
