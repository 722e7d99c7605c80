//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! Solo interesa la primera línea de la request:
//!
//! ```text
//! GET /index.html HTTP/1.1\r\n
//! Host: localhost:2806\r\n
//! \r\n
//! ```
//!
//! Los headers que siguen se leen (para vaciar el socket) pero se ignoran.

/// Terminador del bloque de headers
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Resultado de parsear la primera línea de una request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestLine {
    /// `GET <target> ...`: lo que sigue al target (versión incluida) se ignora
    Get { target: String },

    /// Cualquier otra cosa: método distinto, target faltante, UTF-8 inválido,
    /// línea sin CRLF
    Malformed,
}

impl RequestLine {
    /// Parsea la request line desde los bytes recibidos
    ///
    /// Nunca falla: lo que no se reconoce es `Malformed`.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use static_server::http::RequestLine;
    ///
    /// let line = RequestLine::parse(b"GET /a.html HTTP/1.1\r\n\r\n");
    /// assert_eq!(line.target(), Some("/a.html"));
    ///
    /// assert_eq!(RequestLine::parse(b"POST / HTTP/1.1\r\n\r\n"), RequestLine::Malformed);
    /// ```
    pub fn parse(buffer: &[u8]) -> Self {
        let Ok(text) = std::str::from_utf8(buffer) else {
            return RequestLine::Malformed;
        };

        // La línea tiene que estar terminada
        let Some((line, _rest)) = text.split_once("\r\n") else {
            return RequestLine::Malformed;
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["GET", target, ..] => RequestLine::Get {
                target: (*target).to_string(),
            },
            _ => RequestLine::Malformed,
        }
    }

    /// Target de la request, si está bien formada
    pub fn target(&self) -> Option<&str> {
        match self {
            RequestLine::Get { target } => Some(target),
            RequestLine::Malformed => None,
        }
    }
}

/// Indica si el buffer ya contiene el bloque de headers completo
pub fn has_header_terminator(buffer: &[u8]) -> bool {
    buffer
        .windows(HEADER_TERMINATOR.len())
        .any(|w| w == HEADER_TERMINATOR)
}
