use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::accounts::core::errors::ApplicationError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_)
        | ApplicationError::InsufficientFunds { .. }
        | ApplicationError::ConcurrencyExhausted { .. } => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::DeadlineExceeded { .. } => StatusCode::REQUEST_TIMEOUT,
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        error_response(status_for(&self), self.to_string())
    }
}
