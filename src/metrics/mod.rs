//! # Métricas del Servidor
//! src/metrics/mod.rs
//!
//! Contador global de bytes servidos, compartido por todos los workers.

pub mod counter;

pub use counter::ByteCounter;
