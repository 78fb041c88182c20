//! Servicio de autenticación
//!
//! Credential store con hash bcrypt en lugar del diccionario plano de
//! sesiones: el verify de bcrypt hace la comparación en tiempo constante.
//! El store se bootstrapea desde la configuración al arrancar y queda
//! fuera del core de almacenamiento de vehículos.

use std::collections::HashMap;

use anyhow::Result;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::auth::{UserInfo, UserRole};
use crate::services::jwt_service::JwtService;

#[derive(Debug, Clone)]
struct StaffUser {
    id: String,
    username: String,
    password_hash: String,
    role: UserRole,
}

/// Servicio de autenticación
pub struct AuthService {
    jwt_service: JwtService,
    users: HashMap<String, StaffUser>,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig) -> Result<Self> {
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        let mut users = HashMap::new();
        let admin = StaffUser {
            id: format!("staff_{}", Uuid::new_v4()),
            username: config.admin_username.clone(),
            password_hash: hash(&config.admin_password, DEFAULT_COST)
                .map_err(|e| anyhow::anyhow!("Error hashing admin password: {}", e))?,
            role: UserRole::Admin,
        };
        users.insert(admin.username.clone(), admin);

        Ok(Self { jwt_service, users })
    }

    /// Autentica un usuario del dashboard contra el credential store
    pub fn authenticate(&self, request: &LoginRequest) -> LoginResponse {
        let user = match self.users.get(&request.username) {
            Some(user) => user,
            None => return Self::rejected(),
        };

        match verify(&request.password, &user.password_hash) {
            Ok(true) => {}
            _ => return Self::rejected(),
        }

        let user_info = UserInfo {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
        };

        match self.jwt_service.generate_access_token(&user_info) {
            Ok(token) => LoginResponse {
                success: true,
                token: Some(token),
                user_info: Some(user_info),
                message: None,
                expires_at: Some(Utc::now() + self.jwt_service.access_token_duration()),
            },
            Err(e) => LoginResponse {
                success: false,
                token: None,
                user_info: None,
                message: Some(format!("Authentication error: {}", e)),
                expires_at: None,
            },
        }
    }

    /// Valida un token Bearer y devuelve sus claims
    pub fn validate_token(&self, token: &str) -> Result<crate::models::auth::JwtClaims, String> {
        self.jwt_service.validate_token(token)
    }

    fn rejected() -> LoginResponse {
        LoginResponse {
            success: false,
            token: None,
            user_info: None,
            message: Some("Invalid credentials".to_string()),
            expires_at: None,
        }
    }
}
