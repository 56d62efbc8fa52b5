//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Los errores de persistencia se devuelven tal cual al caller
            AppError::Database(e) => {
                eprintln!("Database error: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }

            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, first_validation_message(&e))
            }

            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::UnprocessableEntity(msg) => {
                eprintln!("Unprocessable entity: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }

            AppError::NotFound(msg) => {
                eprintln!("Resource not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Primer mensaje de un conjunto de errores de validación
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| errors.to_string())
}
