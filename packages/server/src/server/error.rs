//! Mapping of domain errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::common::AuthError;
use crate::domains::inquiries::InquiryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Inquiry(#[from] InquiryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(AuthError::AuthenticationRequired) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::PermissionDenied(_)) => StatusCode::FORBIDDEN,
            ApiError::Auth(AuthError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Inquiry(InquiryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Auth(AuthError::InternalError(_))
            | ApiError::Inquiry(InquiryError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
