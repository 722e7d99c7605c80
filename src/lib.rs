//! # Static Server
//! src/lib.rs
//!
//! Servidor de archivos estáticos HTTP/1.0 concurrente: un thread por
//! conexión, una sola request GET por conexión, y un contador compartido
//! con el total de bytes enviados por todos los workers.
//!
//! ## Arquitectura
//!
//! - `http`: request line, resolución de paths y composición de respuestas
//! - `metrics`: contador de bytes compartido
//! - `server`: listener TCP y worker por conexión
//! - `config`: argumentos CLI y variables de entorno
//! - `error`: tipos de error
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use static_server::config::Config;
//! use static_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod server;
