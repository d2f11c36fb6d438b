use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::model::HoleNumber;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("hole must be between 1 and 9, got {0}")]
    InvalidHoleNumber(i64),
    #[error("loop must be 1 or 2, got {0}")]
    InvalidLoopNumber(i64),
    #[error("stroke count must be between 1 and 10, got {0}")]
    InvalidStrokeCount(i64),
    #[error("hole {0} has no strokes recorded yet")]
    HoleNotScored(HoleNumber),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("{0} parameter is required")]
    MissingParam(&'static str),
    #[error("session unavailable: {0}")]
    SessionUnavailable(String),
}

impl ScorecardError {
    /// True for errors caused by the request itself rather than by the session.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::SessionUnavailable(_))
    }
}

impl ResponseError for ScorecardError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}

impl<T> From<std::sync::PoisonError<T>> for ScorecardError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::SessionUnavailable(err.to_string())
    }
}
