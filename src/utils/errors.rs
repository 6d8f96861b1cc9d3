//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del garaje
//! y su conversión a respuestas HTTP con el par estable `{code, message}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    CarNotFound(String),

    #[error("{0}")]
    SpotNotFound(String),

    #[error("{0}")]
    NoCompatibleSpot(String),

    #[error("{0}")]
    GarageFull(String),

    #[error("{0}")]
    SpotAlreadyExists(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Código estable expuesto al cliente
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) | AppError::Validation(_) => "INVALID_INPUT",
            AppError::CarNotFound(_) => "CAR_NOT_FOUND",
            AppError::SpotNotFound(_) => "SPOT_NOT_FOUND",
            AppError::NoCompatibleSpot(_) => "NO_COMPATIBLE_SPOT_FOUND",
            AppError::GarageFull(_) => "GARAGE_FULL",
            AppError::SpotAlreadyExists(_) => "SPOT_ALREADY_EXISTS",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::CarNotFound(_) | AppError::SpotNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoCompatibleSpot(_)
            | AppError::GarageFull(_)
            | AppError::SpotAlreadyExists(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!("❌ Error interno: {}", msg);
                "An unexpected error occurred".to_string()
            }
            other => {
                tracing::warn!("⚠️ {}: {}", other.code(), other);
                other.to_string()
            }
        };

        let body = ErrorResponse {
            code: self.code().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Cuerpos JSON mal formados o con valores desconocidos son culpa del cliente
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de entrada inválida
pub fn invalid_input_error(message: &str) -> AppError {
    AppError::InvalidInput(message.to_string())
}

/// Función helper para errores de vehículo no encontrado
pub fn car_not_found_error(license_plate: &str) -> AppError {
    AppError::CarNotFound(format!("Car with license plate {} not found", license_plate))
}

/// Función helper para errores de plaza no encontrada
pub fn spot_not_found_error(spot_id: &str) -> AppError {
    AppError::SpotNotFound(format!("Spot with id {} not found", spot_id))
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
