//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes y lanza un thread por cada una
//! 3. Cada thread lee la request, responde con el archivo y reporta los
//!    bytes enviados al contador compartido

pub mod limits;
pub mod tcp;
pub mod worker;

pub use limits::Limits;
pub use tcp::Server;
pub use worker::{ConnectionWorker, Served, WorkerState};
