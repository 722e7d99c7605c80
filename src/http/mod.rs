//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Protocolo mínimo del servidor de archivos:
//!
//! - Parsing de la request line (`GET <target> HTTP/1.1`)
//! - Resolución del target contra el document root
//! - Composición de la respuesta (header fijo + archivo)
//!
//! ### Formato de Request
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Server: RedUnix-Static/0.1\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <html>...
//! ```

pub mod request;
pub mod resolver;
pub mod response;
pub mod status;

pub use request::RequestLine;
pub use resolver::{PathResolver, Resolution};
pub use response::Response;
pub use status::Status;
