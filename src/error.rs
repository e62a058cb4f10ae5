// error.rs
// Request-level error type rendered as `{ "error": ... }` JSON.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("upstream error: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::debug!(message = %msg, "bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Unauthorized => {
                tracing::debug!("missing caller identity");
                (StatusCode::UNAUTHORIZED, "No autorizado".to_string())
            }
            AppError::Forbidden => {
                tracing::debug!("caller is not an admin");
                (StatusCode::FORBIDDEN, "Acceso denegado".to_string())
            }
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "upstream fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error al descargar el archivo".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!(error = ?e, "document store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
