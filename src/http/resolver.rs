//! # Resolución de Paths
//! src/http/resolver.rs
//!
//! Convierte la request recibida en una clasificación (`Status`) y un path
//! real bajo el document root.
//!
//! Orden de las reglas:
//! 1. Request line inválida → `BadRequest`
//! 2. Target que contiene `..` en cualquier posición → `BadRequest`
//! 3. Target `/` → `Ok` con `<root>/index.html`
//! 4. `<root><target>` existe y es un archivo legible → `Ok`, si no `NotFound`
//!
//! La regla 2 es la única defensa contra traversal. No se canonicaliza el
//! path ni se siguen symlinks: un symlink dentro del root que apunte afuera
//! se sirve igual.

use super::request::RequestLine;
use super::status::{Status, DEFAULT_DOCUMENT};
use crate::error::ServeError;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Resultado de resolver una request
#[derive(Debug)]
pub struct Resolution {
    pub status: Status,

    /// Archivo a servir: el documento pedido o la página de error
    pub path: PathBuf,

    /// Motivo del rechazo, solo para diagnóstico
    pub reason: Option<ServeError>,
}

/// Resuelve targets contra un document root fijo
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resuelve los bytes crudos de una request
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use static_server::http::{PathResolver, Status};
    ///
    /// let resolver = PathResolver::new("html");
    /// let res = resolver.resolve(b"GET /../etc/passwd HTTP/1.1\r\n\r\n");
    /// assert_eq!(res.status, Status::BadRequest);
    /// assert_eq!(res.path, std::path::Path::new("html/400.html"));
    /// ```
    pub fn resolve(&self, raw: &[u8]) -> Resolution {
        match RequestLine::parse(raw) {
            RequestLine::Get { target } => self.resolve_target(&target),
            RequestLine::Malformed => self.reject(Status::BadRequest, ServeError::Malformed),
        }
    }

    /// Resuelve un target ya extraído de la request line
    pub fn resolve_target(&self, target: &str) -> Resolution {
        if target.contains("..") {
            return self.reject(Status::BadRequest, ServeError::Traversal(target.to_string()));
        }

        if target == "/" {
            return Resolution {
                status: Status::Ok,
                path: self.root.join(DEFAULT_DOCUMENT),
                reason: None,
            };
        }

        let path = self.join(target);
        if is_servable(&path) {
            Resolution {
                status: Status::Ok,
                path,
                reason: None,
            }
        } else {
            self.reject(Status::NotFound, ServeError::NotFound(target.to_string()))
        }
    }

    /// Path de la página de error para una clasificación que no es `Ok`
    pub fn error_page(&self, status: Status) -> Option<PathBuf> {
        status.error_page().map(|page| self.root.join(page))
    }

    /// Rechaza la request con `status`, apuntando a su página de error
    pub fn reject(&self, status: Status, reason: ServeError) -> Resolution {
        tracing::debug!(%status, %reason, "request rechazada");
        Resolution {
            status,
            path: self.error_page(status).unwrap_or_default(),
            reason: Some(reason),
        }
    }

    // Concatenación literal: `Path::join` descartaría el root con targets absolutos
    fn join(&self, target: &str) -> PathBuf {
        let mut joined = self.root.clone().into_os_string();
        joined.push(target);
        PathBuf::from(joined)
    }
}

fn is_servable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => File::open(path).is_ok(),
        _ => false,
    }
}
