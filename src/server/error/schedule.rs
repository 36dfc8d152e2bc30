use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failures while persisting or loading a schedule aggregate.
///
/// The constraint variants come from the storage layer (unique index and
/// containment triggers); the repository classifies and forwards them
/// unchanged. They are never retried or silently corrected — the caller must
/// resubmit corrected data.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A delivery date lies outside its schedule's `[start_date, end_date]`
    /// window. Raised by the storage triggers on insert or update.
    #[error("delivery date falls outside the schedule window")]
    DeliveryOutsideWindow,

    /// Two deliveries of the same schedule share a date. Raised by the
    /// unique index over `(schedule_id, delivery_date)`.
    #[error("duplicate delivery date within the schedule")]
    DuplicateDelivery,

    /// Any other database error.
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Converts schedule errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For the two constraint violations, with the specific message
/// - 500 Internal Server Error - For underlying database errors
impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        match self {
            Self::DeliveryOutsideWindow | Self::DuplicateDelivery => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Db(err) => InternalServerError(err).into_response(),
        }
    }
}
