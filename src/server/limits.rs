//! # Límites por Conexión
//! src/server/limits.rs

use crate::config::Config;
use std::time::Duration;

/// Cotas de lectura que cada worker aplica a su conexión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Tiempo máximo bloqueado esperando bytes de la request
    pub read_timeout: Duration,

    /// Bytes máximos de request line + headers
    pub max_request_bytes: usize,
}

impl Limits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            read_timeout: config.read_timeout(),
            max_request_bytes: config.max_request_bytes,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
