use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use layout_core::collision::LayoutError;
use layout_core::ErrorKind;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Error body shared by HTTP responses and socket `ERROR_UPDATE` frames.
pub fn error_payload(code: &str, message: &str, severity: &str) -> serde_json::Value {
    json!({
        "code": code,
        "message": message,
        "severity": severity
    })
}

/// Format an error as a socket message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!("ERROR_UPDATE:{}", error_payload(code, message, severity))
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("layout not found: {0}")]
    LayoutNotFound(Uuid),

    #[error("server state unavailable")]
    StatePoisoned,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Layout(LayoutError::EquipmentNotFound(_)) => "EQUIPMENT_NOT_FOUND",
            Self::Layout(LayoutError::InvalidDimensions { .. }) => "INVALID_DIMENSIONS",
            Self::LayoutNotFound(_) => "LAYOUT_NOT_FOUND",
            Self::StatePoisoned => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Layout(e) => match e.kind() {
                ErrorKind::ReferenceNotFound => StatusCode::NOT_FOUND,
                ErrorKind::MalformedInput | ErrorKind::GeometricInvalid => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            Self::LayoutNotFound(_) => StatusCode::NOT_FOUND,
            Self::StatePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = error_payload(self.code(), &self.to_string(), "error");
        (self.status(), Json(body)).into_response()
    }
}
