//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del servicio
//! y su conversión a respuestas HTTP con cuerpo JSON `{"error": "<mensaje>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Filtro rechazado: responde 400 con el mensaje fijo en español
    #[error("{0}")]
    Validacion(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("File error: {0}")]
    Archivo(#[from] std::io::Error),

    #[error("Not found")]
    NotFound,
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validacion(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::Database(e) => {
                tracing::error!("❌ Error de base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor.".to_string(),
                )
            }

            AppError::Archivo(e) => {
                tracing::error!("❌ Error leyendo archivo: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor.".to_string(),
                )
            }

            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Recurso no encontrado.".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
