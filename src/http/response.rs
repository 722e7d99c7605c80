//! # Composición de Respuestas
//! src/http/response.rs
//!
//! Escribe el header fijo de la clasificación y luego el archivo resuelto,
//! byte a byte tal cual está en disco.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Server: RedUnix-Static/0.1\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <contenido del archivo>
//! ```
//!
//! Si el archivo no se puede abrir (típicamente una página de error que no
//! existe) se envía solo el header.

use super::resolver::Resolution;
use super::status::Status;
use crate::error::ServeError;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::PathBuf;

/// Tamaño de cada bloque copiado del archivo al socket
pub const CHUNK_SIZE: usize = 8192;

/// Respuesta lista para enviar: clasificación + artefacto a copiar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    path: PathBuf,
}

impl Response {
    pub fn new(status: Status, path: impl Into<PathBuf>) -> Self {
        Self {
            status,
            path: path.into(),
        }
    }

    /// Escribe header y body en `out`
    ///
    /// Retorna el total de bytes escritos (header + body). Solo falla si la
    /// escritura en `out` falla.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use static_server::http::{Response, Status};
    ///
    /// let response = Response::new(Status::NotFound, "/no/existe/404.html");
    /// let mut out = Vec::new();
    /// let sent = response.write_to(&mut out).unwrap();
    ///
    /// // Sin página de error: solo el header
    /// assert_eq!(sent as usize, Status::NotFound.header().len());
    /// assert_eq!(out, Status::NotFound.header().as_bytes());
    /// ```
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<u64, ServeError> {
        let header = self.status.header();
        out.write_all(header.as_bytes()).map_err(ServeError::Send)?;
        let mut sent = header.len() as u64;

        match File::open(&self.path) {
            Ok(mut file) => sent += self.copy_body(&mut file, out)?,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    status = %self.status,
                    error = %e,
                    "no se pudo abrir el archivo, se envía solo el header"
                );
            }
        }

        out.flush().map_err(ServeError::Send)?;
        Ok(sent)
    }

    fn copy_body<R: Read, W: Write>(&self, file: &mut R, out: &mut W) -> Result<u64, ServeError> {
        let mut buffer = [0u8; CHUNK_SIZE];
        let mut copied = 0u64;

        loop {
            let n = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    // Lo que ya salió por el socket se cuenta igual
                    tracing::warn!(
                        path = %self.path.display(),
                        copied,
                        error = %e,
                        "error leyendo el archivo, respuesta truncada"
                    );
                    break;
                }
            };
            out.write_all(&buffer[..n]).map_err(ServeError::Send)?;
            copied += n as u64;
        }

        Ok(copied)
    }
}

impl From<&Resolution> for Response {
    fn from(resolution: &Resolution) -> Self {
        Self::new(resolution.status, resolution.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;

    /// Writer que falla después de aceptar `limit` bytes
    struct BrokenPipe {
        accepted: usize,
        limit: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted >= self.limit {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "peer gone"));
            }
            let n = buf.len().min(self.limit - self.accepted);
            self.accepted += n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ok_response_header_then_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<h1>Hola</h1>").unwrap();

        let mut out = Vec::new();
        let sent = Response::new(Status::Ok, &path).write_to(&mut out).unwrap();

        let text = String::from_utf8(out.clone()).unwrap();
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.ends_with("\r\n\r\n<h1>Hola</h1>"));
        assert_eq!(sent as usize, out.len());
        assert_eq!(sent as usize, Status::Ok.header().len() + "<h1>Hola</h1>".len());
    }

    #[test]
    fn test_error_page_is_served() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("400.html");
        fs::write(&path, "bad request page").unwrap();

        let mut out = Vec::new();
        let sent = Response::new(Status::BadRequest, &path).write_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.0 400 Bad Request\r\n"));
        assert!(text.ends_with("bad request page"));
        assert_eq!(sent as usize, text.len());
    }

    #[test]
    fn test_missing_artifact_sends_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let sent = Response::new(Status::NotFound, dir.path().join("404.html"))
            .write_to(&mut out)
            .unwrap();

        assert_eq!(out, Status::NotFound.header().as_bytes());
        assert_eq!(sent as usize, Status::NotFound.header().len());
    }

    #[test]
    fn test_body_is_copied_verbatim_across_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let body: Vec<u8> = (0..(CHUNK_SIZE * 3 + 17)).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &body).unwrap();

        let mut out = Vec::new();
        let sent = Response::new(Status::Ok, &path).write_to(&mut out).unwrap();

        let header_len = Status::Ok.header().len();
        assert_eq!(&out[header_len..], &body[..]);
        assert_eq!(sent as usize, header_len + body.len());
    }

    #[test]
    fn test_write_failure_is_send_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, vec![b'x'; CHUNK_SIZE * 2]).unwrap();

        let mut out = BrokenPipe { accepted: 0, limit: 100 };
        let result = Response::new(Status::Ok, &path).write_to(&mut out);
        assert!(matches!(result, Err(ServeError::Send(_))));
    }

    #[test]
    fn test_header_write_failure_is_send_error() {
        let mut out = BrokenPipe { accepted: 0, limit: 0 };
        let result = Response::new(Status::Ok, "/nada").write_to(&mut out);
        assert!(matches!(result, Err(ServeError::Send(_))));
    }

    #[test]
    fn test_from_resolution() {
        let resolution = Resolution {
            status: Status::NotFound,
            path: PathBuf::from("html/404.html"),
            reason: None,
        };
        assert_eq!(
            Response::from(&resolution),
            Response::new(Status::NotFound, "html/404.html")
        );
    }
}
