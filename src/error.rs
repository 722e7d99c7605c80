//! # Errores del Servidor
//! src/error.rs
//!
//! Taxonomía de fallos por conexión y errores de arranque.
//!
//! Solo `Send` termina una conexión sin respuesta: el canal ya está roto.
//! Todos los demás fallos por conexión se convierten en una respuesta 400/404.

use std::io;
use thiserror::Error;

/// Fallos que pueden ocurrir mientras se atiende una conexión
#[derive(Debug, Error)]
pub enum ServeError {
    /// La request line no tiene la forma `GET <target> HTTP/1.x`
    #[error("malformed request line")]
    Malformed,

    /// El target contiene la secuencia `..`
    #[error("path traversal attempt: {0}")]
    Traversal(String),

    /// El target no existe bajo el document root
    #[error("not found: {0}")]
    NotFound(String),

    /// Error leyendo la request (timeout, reset, request demasiado grande)
    #[error("failed to read request: {0}")]
    Read(#[source] io::Error),

    /// Error escribiendo la respuesta; la conexión se abandona
    #[error("failed to send response: {0}")]
    Send(#[source] io::Error),
}

/// Errores que impiden arrancar el servidor
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
