//! # Contador de Bytes Compartido
//! src/metrics/counter.rs
//!
//! Acumula el total de bytes enviados por todos los workers. Es el único
//! estado mutable compartido del servidor.

use std::sync::atomic::{AtomicU64, Ordering};

/// Acumulador thread-safe del total de bytes servidos
///
/// Se crea una vez al arrancar y se comparte con `Arc` entre los workers.
/// Solo expone `add_and_get`: no hay reset ni decremento.
#[derive(Debug, Default)]
pub struct ByteCounter {
    total: AtomicU64,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suma `bytes` y retorna el total resultante, en un solo paso atómico
    ///
    /// # Ejemplo
    /// ```
    /// use static_server::metrics::ByteCounter;
    ///
    /// let counter = ByteCounter::new();
    /// assert_eq!(counter.add_and_get(100), 100);
    /// assert_eq!(counter.add_and_get(23), 123);
    /// assert_eq!(counter.add_and_get(0), 123);
    /// ```
    pub fn add_and_get(&self, bytes: u64) -> u64 {
        self.total.fetch_add(bytes, Ordering::AcqRel) + bytes
    }
}
