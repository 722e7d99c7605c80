//! # Clasificación de Requests y Headers
//! src/http/status.rs
//!
//! Cada request termina en una de tres clasificaciones. Cada una tiene un
//! header fijo y, si no es `Ok`, una página de error fija bajo el document root.
//!
//! | Clasificación | Status line                | Página de error |
//! |---------------|----------------------------|-----------------|
//! | `Ok`          | `HTTP/1.0 200 OK`          | -               |
//! | `BadRequest`  | `HTTP/1.0 400 Bad Request` | `400.html`      |
//! | `NotFound`    | `HTTP/1.0 404 Not Found`   | `404.html`      |

// `concat!` solo acepta literales, así que el nombre vive en una macro
macro_rules! server_name {
    () => {
        "RedUnix-Static/0.1"
    };
}

// Header completo para una status line dada
macro_rules! header {
    ($status_line:literal) => {
        concat!(
            $status_line,
            "\r\nServer: ",
            server_name!(),
            "\r\nContent-Type: text/html\r\n\r\n"
        )
    };
}

/// Identificador enviado en el header `Server`
pub const SERVER_NAME: &str = server_name!();

/// Documento servido cuando el target es exactamente `/`
pub const DEFAULT_DOCUMENT: &str = "index.html";

const HEADER_200: &str = header!("HTTP/1.0 200 OK");
const HEADER_400: &str = header!("HTTP/1.0 400 Bad Request");
const HEADER_404: &str = header!("HTTP/1.0 404 Not Found");

/// Resultado de resolver el target de una request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// 200 OK - El archivo existe y se puede leer
    Ok = 200,

    /// 400 Bad Request - Request malformada o intento de traversal
    BadRequest = 400,

    /// 404 Not Found - El archivo no existe bajo el document root
    NotFound = 404,
}

impl Status {
    /// Convierte la clasificación a su código numérico
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::http::Status;
    /// assert_eq!(Status::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
        }
    }

    /// Header completo, incluida la línea vacía final
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::http::Status;
    /// assert!(Status::Ok.header().starts_with("HTTP/1.0 200 OK\r\n"));
    /// assert!(Status::Ok.header().ends_with("\r\n\r\n"));
    /// ```
    pub fn header(&self) -> &'static str {
        match self {
            Status::Ok => HEADER_200,
            Status::BadRequest => HEADER_400,
            Status::NotFound => HEADER_404,
        }
    }

    /// Nombre de la página de error bajo el document root (`None` para `Ok`)
    pub fn error_page(&self) -> Option<&'static str> {
        match self {
            Status::Ok => None,
            Status::BadRequest => Some("400.html"),
            Status::NotFound => Some("404.html"),
        }
    }
}

impl std::fmt::Display for Status {
    /// Formato: "404 Not Found"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
