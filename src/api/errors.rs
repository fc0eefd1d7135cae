use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, warn};
use crate::errors::PlagError;

impl IntoResponse for PlagError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            PlagError::InvalidRequest(_) | PlagError::Json(_) => StatusCode::BAD_REQUEST,
            PlagError::Config(_) | PlagError::Yaml(_) => StatusCode::BAD_REQUEST,
            PlagError::NotFound(_) => StatusCode::NOT_FOUND,
            PlagError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            PlagError::Io(_) | PlagError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
