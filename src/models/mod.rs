//! Modelos del dominio
//!
//! Structs que mapean al schema SQLite y tipos del workflow del taller.

pub mod auth;
pub mod vehicle;
