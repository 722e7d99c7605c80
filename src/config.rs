//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./static_server --port 2806 --root ./html --read-timeout-ms 5000
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! STATIC_PORT=8080 STATIC_ROOT=/srv/www ./static_server
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Límite superior para `max_request_bytes`
pub const MAX_REQUEST_BYTES_LIMIT: usize = 1024 * 1024;

/// Límite inferior para `max_request_bytes` (cabe `GET / HTTP/1.1\r\n\r\n`)
pub const MIN_REQUEST_BYTES: usize = 16;

/// Configuración del servidor de archivos
#[derive(Debug, Clone, Parser)]
#[command(name = "static_server")]
#[command(about = "Servidor de archivos estáticos HTTP/1.0 concurrente")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "2806", env = "STATIC_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "STATIC_HOST")]
    pub host: String,

    /// Document root: directorio con los archivos a servir
    #[arg(long, default_value = "./html", env = "STATIC_ROOT")]
    pub root: PathBuf,

    /// Tiempo máximo esperando la request de un cliente, en milisegundos
    #[arg(long = "read-timeout-ms", default_value = "5000", env = "STATIC_READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Tamaño máximo de la request (request line + headers)
    #[arg(long = "max-request-bytes", default_value = "8192", env = "STATIC_MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,
}

impl Config {
    /// Crea la configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use static_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:2806");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be > 0".to_string());
        }

        if self.read_timeout_ms == 0 {
            return Err("Read timeout must be > 0".to_string());
        }

        if !(MIN_REQUEST_BYTES..=MAX_REQUEST_BYTES_LIMIT).contains(&self.max_request_bytes) {
            return Err(format!(
                "Max request bytes must be {}-{}",
                MIN_REQUEST_BYTES, MAX_REQUEST_BYTES_LIMIT
            ));
        }

        Ok(())
    }

    /// Registra un resumen de la configuración
    pub fn print_summary(&self) {
        tracing::info!(
            address = %self.address(),
            root = %self.root.display(),
            read_timeout_ms = self.read_timeout_ms,
            max_request_bytes = self.max_request_bytes,
            "configuración cargada"
        );

        if !self.root.is_dir() {
            tracing::warn!(
                root = %self.root.display(),
                "el document root no existe, todas las requests darán 404"
            );
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 2806,
            host: "0.0.0.0".to_string(),
            root: PathBuf::from("./html"),
            read_timeout_ms: 5_000,
            max_request_bytes: 8192,
        }
    }
}
