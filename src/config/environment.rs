//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// URL de la base de datos SQLite (archivo único en ruta fija)
    pub database_url: String,
    pub jwt_secret: String,
    /// Expiración del token en horas
    pub jwt_expiration_hours: i64,
    pub cors_origins: Vec<String>,
    // Credenciales bootstrap del usuario administrador
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://workshop.db".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "workshop-dev-secret-change-in-production".to_string()),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            admin_username: env::var("WORKSHOP_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("WORKSHOP_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_fixed_database_path() {
        let config = EnvironmentConfig::default();
        assert!(config.database_url.starts_with("sqlite://"));
        assert!(config.port > 0);
    }

    #[test]
    fn test_environment_mode_checks() {
        let mut config = EnvironmentConfig::default();
        config.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
