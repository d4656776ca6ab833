use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned when a submitted URL fails validation.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL! Please enter a valid URL.";

/// Body returned when a short code has no mapping.
pub const NOT_FOUND_MESSAGE: &str = "URL not found";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid URL")]
    InvalidUrl,

    #[error("short code not found")]
    NotFound,

    #[error("no free short code after {attempts} attempt(s)")]
    CodeSpaceExhausted { attempts: u32 },

    #[error("stored URL cannot be sent as a redirect: {0:?}")]
    Unredirectable(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidUrl => (StatusCode::BAD_REQUEST, INVALID_URL_MESSAGE),
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::CodeSpaceExhausted { attempts } => {
                tracing::warn!("Gave up allocating a short code after {} attempt(s)", attempts);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Could not allocate a short code, please try again.",
                )
            }
            AppError::Unredirectable(url) => {
                tracing::error!("Cannot build a Location header for {:?}", url);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
            AppError::Database(e) => {
                tracing::error!("DB error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        (status, body).into_response()
    }
}
