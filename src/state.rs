//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::EnvironmentConfig;
use crate::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig, auth: AuthService) -> Self {
        Self {
            pool,
            config,
            auth: Arc::new(auth),
        }
    }
}
