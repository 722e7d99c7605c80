//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones y lanza un thread por cada una. Cada thread ejecuta un
//! `ConnectionWorker` que comparte con los demás solo el resolver y el
//! contador de bytes.

use super::limits::Limits;
use super::worker::ConnectionWorker;
use crate::config::Config;
use crate::error::StartupError;
use crate::http::PathResolver;
use crate::metrics::ByteCounter;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};
use std::sync::Arc;
use std::thread;

/// Conexiones pendientes que el kernel encola antes de `accept`
pub const LISTEN_BACKLOG: i32 = 10;

/// Servidor de archivos HTTP/1.0 concurrente
pub struct Server {
    config: Config,
    resolver: Arc<PathResolver>,
    counter: Arc<ByteCounter>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let resolver = PathResolver::new(config.root.clone());

        Self {
            config,
            resolver: Arc::new(resolver),
            counter: Arc::new(ByteCounter::new()),
        }
    }

    /// Contador compartido por todos los workers de este servidor
    pub fn counter(&self) -> Arc<ByteCounter> {
        Arc::clone(&self.counter)
    }

    /// Crea el listener en la dirección configurada con backlog `LISTEN_BACKLOG`
    pub fn bind(&self) -> io::Result<TcpListener> {
        let address = self.config.address();
        let addr = address.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("no address for {}", address))
        })?;
        bind_with_backlog(addr, LISTEN_BACKLOG)
    }

    /// Hace bind en la dirección configurada y atiende conexiones para siempre
    pub fn run(&self) -> Result<(), StartupError> {
        let listener = self.bind()?;
        let local = listener.local_addr()?;
        tracing::info!(address = %local, "servidor escuchando, un thread por conexión");
        self.serve(listener);
        Ok(())
    }

    /// Loop de accept sobre un listener ya creado
    ///
    /// Los errores de accept o de spawn se registran y el loop sigue.
    pub fn serve(&self, listener: TcpListener) {
        let limits = Limits::from_config(&self.config);
        let mut next_id: u64 = 0;

        for stream in listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::error!(error = %e, "error al aceptar conexión");
                    continue;
                }
            };

            next_id += 1;
            let peer = stream
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|_| "unknown".to_string());
            tracing::debug!(worker = next_id, %peer, "nueva conexión");

            let worker = ConnectionWorker::new(
                next_id,
                Arc::clone(&self.resolver),
                Arc::clone(&self.counter),
                limits,
            );

            let spawned = thread::Builder::new()
                .name(format!("worker-{}", next_id))
                .spawn(move || worker.run(stream));

            if let Err(e) = spawned {
                tracing::error!(worker = next_id, error = %e, "no se pudo lanzar el worker");
            }
        }
    }
}

fn bind_with_backlog(addr: SocketAddr, backlog: i32) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.bind(&addr.into())?;
    socket.listen(backlog)?;
    Ok(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Read, Write};
    use std::net::{Shutdown, TcpStream};
    use std::time::Duration;

    fn start(root: &std::path::Path) -> (std::net::SocketAddr, Arc<ByteCounter>) {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = 0;
        config.root = root.to_path_buf();
        config.read_timeout_ms = 500;

        let server = Server::new(config);
        let listener = server.bind().unwrap();
        let addr = listener.local_addr().unwrap();
        let counter = server.counter();
        thread::spawn(move || server.serve(listener));
        (addr, counter)
    }

    fn get(addr: std::net::SocketAddr, raw: &[u8]) -> Vec<u8> {
        let mut client = TcpStream::connect(addr).unwrap();
        client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        client.write_all(raw).unwrap();
        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_bind_with_backlog_accepts() {
        let listener = bind_with_backlog("127.0.0.1:0".parse().unwrap(), LISTEN_BACKLOG).unwrap();
        let addr = listener.local_addr().unwrap();
        assert_ne!(addr.port(), 0);

        let client = TcpStream::connect(addr).unwrap();
        let (accepted, peer) = listener.accept().unwrap();
        assert_eq!(peer, client.local_addr().unwrap());
        drop(accepted);
    }

    #[test]
    fn test_bind_address_in_use_fails() {
        let first = bind_with_backlog("127.0.0.1:0".parse().unwrap(), LISTEN_BACKLOG).unwrap();
        let taken = first.local_addr().unwrap();
        assert!(bind_with_backlog(taken, LISTEN_BACKLOG).is_err());
    }

    #[test]
    fn test_serve_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "hola").unwrap();
        let (addr, counter) = start(dir.path());

        let response = get(addr, b"GET / HTTP/1.1\r\n\r\n");
        let text = String::from_utf8(response.clone()).unwrap();
        assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(text.ends_with("\r\n\r\nhola"));

        // El worker suma antes de cerrar el socket
        assert_eq!(counter.add_and_get(0), response.len() as u64);
    }

    #[test]
    fn test_peer_sends_nothing_gets_400() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("400.html"), "mal").unwrap();
        let (addr, _counter) = start(dir.path());

        let mut client = TcpStream::connect(addr).unwrap();
        client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("HTTP/1.0 400 Bad Request\r\n"));
        assert!(text.ends_with("mal"));
    }

    #[test]
    fn test_silent_peer_times_out_with_400() {
        let dir = tempfile::tempdir().unwrap();
        let (addr, _counter) = start(dir.path());

        // Conecta pero nunca envía ni cierra: el read timeout del worker (500ms) corta
        let mut client = TcpStream::connect(addr).unwrap();
        client.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, crate::http::Status::BadRequest.header().as_bytes());
    }
}
