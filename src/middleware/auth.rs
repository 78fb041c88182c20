//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción del token Bearer y la inyección
//! del usuario autenticado en las requests de vehículos.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub role: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    // Decodificar y validar JWT contra el secret configurado
    let claims = state
        .auth
        .validate_token(auth_header)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}
