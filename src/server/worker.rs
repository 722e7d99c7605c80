//! # Worker por Conexión
//! src/server/worker.rs
//!
//! Atiende una conexión de punta a punta:
//!
//! ```text
//! AwaitingRequest → Parsing → Responding → Reporting → Closed
//! ```
//!
//! - Un error leyendo la request se responde con 400, no se corta la conexión.
//! - Un error escribiendo la respuesta termina solo esta conexión y no suma
//!   nada al contador.
//! - El stream se cierra en todos los caminos de salida.

use super::limits::Limits;
use crate::error::ServeError;
use crate::http::request::has_header_terminator;
use crate::http::{PathResolver, Response, Status};
use crate::metrics::ByteCounter;
use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;

/// Bytes leídos del socket por cada llamada a `read`
const READ_CHUNK: usize = 1024;

/// Estados por los que pasa un worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    AwaitingRequest,
    Parsing,
    Responding,
    Reporting,
    Closed,
}

/// Resultado de una conexión atendida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Served {
    pub status: Status,

    /// Bytes de esta respuesta (header + body)
    pub bytes: u64,

    /// Total acumulado del servidor después de sumar `bytes`
    pub total: u64,
}

/// Worker de una sola conexión
///
/// Solo comparte con los demás workers el resolver (inmutable) y el contador.
pub struct ConnectionWorker {
    id: u64,
    resolver: Arc<PathResolver>,
    counter: Arc<ByteCounter>,
    limits: Limits,
    state: WorkerState,
}

impl ConnectionWorker {
    pub fn new(
        id: u64,
        resolver: Arc<PathResolver>,
        counter: Arc<ByteCounter>,
        limits: Limits,
    ) -> Self {
        Self {
            id,
            resolver,
            counter,
            limits,
            state: WorkerState::AwaitingRequest,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Atiende la conexión y la cierra
    pub fn run(mut self, mut stream: TcpStream) {
        if let Err(e) = stream.set_read_timeout(Some(self.limits.read_timeout)) {
            tracing::warn!(worker = self.id, error = %e, "no se pudo configurar el read timeout");
        }

        if let Err(e) = self.handle(&mut stream) {
            tracing::warn!(
                worker = self.id,
                state = ?self.state(),
                error = %e,
                "conexión abandonada"
            );
        }

        // El peer puede haber cerrado ya; no hay nada que hacer con ese error
        if let Err(e) = stream.shutdown(Shutdown::Both) {
            tracing::trace!(worker = self.id, error = %e, "shutdown");
        }
        self.transition(WorkerState::Closed);
    }

    /// Lee la request, responde y reporta los bytes enviados
    ///
    /// Solo retorna error si falló la escritura de la respuesta.
    pub fn handle<S: Read + Write>(&mut self, stream: &mut S) -> Result<Served, ServeError> {
        self.transition(WorkerState::AwaitingRequest);
        let request = self.read_request(stream);

        self.transition(WorkerState::Parsing);
        let resolution = match request {
            Ok(raw) => self.resolver.resolve(&raw),
            Err(e) => {
                tracing::debug!(worker = self.id, error = %e, "request ilegible");
                self.resolver.reject(Status::BadRequest, e)
            }
        };

        self.transition(WorkerState::Responding);
        let bytes = Response::from(&resolution).write_to(stream)?;

        self.transition(WorkerState::Reporting);
        let total = self.counter.add_and_get(bytes);
        tracing::info!(
            worker = self.id,
            status = resolution.status.as_u16(),
            bytes,
            total,
            "worker {} sirvió {} bytes, total enviado {}",
            self.id,
            bytes,
            total
        );

        Ok(Served {
            status: resolution.status,
            bytes,
            total,
        })
    }

    /// Lee hasta el fin del bloque de headers, EOF o el límite de bytes
    fn read_request<R: Read>(&self, stream: &mut R) -> Result<Vec<u8>, ServeError> {
        let max = self.limits.max_request_bytes;
        let mut buffer = Vec::with_capacity(max.min(READ_CHUNK * 4));
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            if has_header_terminator(&buffer) {
                return Ok(buffer);
            }
            if buffer.len() >= max {
                return Err(ServeError::Read(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("request exceeds {} bytes", max),
                )));
            }

            let want = (max - buffer.len()).min(READ_CHUNK);
            match stream.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ServeError::Read(e)),
            }
        }

        if buffer.is_empty() {
            return Err(ServeError::Read(io::Error::new(
                ErrorKind::UnexpectedEof,
                "peer closed before sending a request",
            )));
        }
        Ok(buffer)
    }

    fn transition(&mut self, next: WorkerState) {
        tracing::trace!(worker = self.id, from = ?self.state, to = ?next, "transición");
        self.state = next;
    }
}
