//! Error-to-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use vitrine_core::{ErrorResponse, FieldError, VitrineError};

/// Handler result type.
pub type ApiResult<T> = Result<T, AppError>;

/// Wrapper turning a [`VitrineError`] into an HTTP response.
pub struct AppError(pub VitrineError);

impl<E: Into<VitrineError>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Response for a body that parsed but failed field validation.
pub struct UnprocessableEntity(pub Vec<FieldError>);

impl IntoResponse for UnprocessableEntity {
    fn into_response(self) -> Response {
        let summary = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        let body = ErrorResponse {
            code: "VALIDATION_ERROR".to_string(),
            message: summary,
            details: Some(self.0),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}
