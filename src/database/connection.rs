//! Configuración de conexión a SQLite
//!
//! Este módulo maneja la conexión al archivo único de base de datos.
//! El pool se limita a una sola conexión: las escrituras se serializan
//! en el handle y no hace falta coordinación adicional entre usuarios.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Crear el pool de conexiones a la base de datos
///
/// Si no se pasa URL se usa la variable de entorno DATABASE_URL, con la
/// ruta fija `sqlite://workshop.db` como default. El archivo se crea en
/// el primer arranque si no existe.
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://workshop.db".to_string()),
    };

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Pool en memoria para tests aislados contra un store temporal
pub async fn create_memory_pool() -> Result<SqlitePool> {
    // max_connections(1) mantiene viva la base en memoria entre acquires
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    Ok(pool)
}
