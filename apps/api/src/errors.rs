use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Shown when any required applicant field is missing or blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Mohon lengkapi semua field yang wajib diisi";

/// Shown when the email does not look like `local@domain.tld`.
pub const INVALID_EMAIL_MESSAGE: &str = "Format email tidak valid";

/// Shown when the request body exceeds the extractor's size limit.
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Ukuran data yang dikirim terlalu besar";

/// Shown for every internal failure. Details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan saat membuat surat";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected letter request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::PayloadTooLarge => {
                tracing::warn!("Rejected oversized letter request");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}
