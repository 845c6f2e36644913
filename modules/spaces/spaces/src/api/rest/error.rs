use api_gateway::auth::json_error;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::domain::error::DomainError;

/// Error returned by REST handlers; renders as `{"message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    BadBody(JsonRejection),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::BadBody(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                json_error(StatusCode::BAD_REQUEST, "Validation failed")
            }
            Self::Domain(err) => {
                let status = status_for(&err);
                if status.is_server_error() {
                    tracing::error!(error = %err, "request failed");
                    json_error(status, "Internal server error")
                } else {
                    json_error(status, &message_for(&err))
                }
            }
        }
    }
}

fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation { .. } | DomainError::OutOfBounds { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for(err: &DomainError) -> String {
    match err {
        DomainError::NotFound { entity, .. } => {
            let mut chars = entity.chars();
            match chars.next() {
                Some(first) => format!("{}{} not found", first.to_uppercase(), chars.as_str()),
                None => "Not found".to_owned(),
            }
        }
        DomainError::Forbidden => "Forbidden".to_owned(),
        DomainError::OutOfBounds { .. } => "Point is outside of the boundary".to_owned(),
        other => other.to_string(),
    }
}
