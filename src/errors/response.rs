use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::codes::ErrorKind;

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, mirrored on the response itself
    pub status: u16,
    /// Local time at which the response was built
    #[schema(value_type = String, example = "2026-10-18T09:41:07.123456789")]
    pub timestamp: NaiveDateTime,
    /// Short fixed title for the error category
    #[serde(rename = "message")]
    pub title: String,
    /// Message taken from the underlying condition
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response stamped with the current local time.
    ///
    /// The stamp comes from the wall clock, so it can step backwards if the
    /// system clock is adjusted.
    pub fn new(kind: ErrorKind, details: Option<String>) -> Self {
        Self {
            status: kind.status_code(),
            timestamp: Local::now().naive_local(),
            title: kind.title().to_string(),
            details,
        }
    }

    /// True when both responses carry the same status, title and details
    pub fn same_outcome(&self, other: &ErrorResponse) -> bool {
        self.status == other.status && self.title == other.title && self.details == other.details
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
