//! Error handling for the weather proxy
//!
//! Every failure maps to the wire error shape `{error, details, timestamp}`
//! with a matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use shared::models::weather::ApiErrorBody;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors (fatal per request, no retry)
    #[error("provider API key is not configured")]
    MissingApiKey,

    #[error("provider API key has the wrong length")]
    MalformedApiKey,

    // Upstream errors
    #[error("provider rejected the API key")]
    UpstreamAuth,

    #[error("provider error ({status}): {details}")]
    Upstream { status: u16, details: String },

    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    // Internal errors
    #[error("internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuración incompleta",
                "API key no configurada en variables de entorno".to_string(),
            ),
            AppError::MalformedApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuración incorrecta",
                "La API key debe tener 32 caracteres".to_string(),
            ),
            AppError::UpstreamAuth => (
                StatusCode::UNAUTHORIZED,
                "API key inválida",
                "Verifica tu API key en OpenWeatherMap".to_string(),
            ),
            AppError::Upstream { status, details } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Error de la API",
                details.clone(),
            ),
            // reqwest error messages embed the request URL, credential
            // included; clients get a fixed diagnostic, the log gets the rest
            AppError::Request(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor",
                "No se pudo contactar al proveedor de clima".to_string(),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor",
                msg.clone(),
            ),
        };

        tracing::error!("Error: {:?}", self);

        let body = ApiErrorBody {
            error: error.to_string(),
            details,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
