//! Sistema de manejo de errores
//!
//! Este módulo define los tres tipos de fallo del servicio. El texto de cada
//! error viaja tal cual en el campo `errors` de la respuesta; el status HTTP
//! lo decide cada ruta según la operación.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Falta algún campo obligatorio al crear un vehículo
    #[error("{0}")]
    Validation(String),

    /// Ningún registro con el id pedido
    #[error("{0}")]
    NotFound(String),

    /// Fallo de la capa de persistencia
    #[error("{0}")]
    Storage(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
