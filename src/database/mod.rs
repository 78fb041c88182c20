//! Módulo de base de datos
//!
//! Maneja la conexión al archivo SQLite del taller.

pub mod connection;

pub use connection::{create_memory_pool, create_pool};
