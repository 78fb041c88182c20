use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login contra el credential store. Credenciales inválidas devuelven
/// success=false con 200, igual que el resto de respuestas de auth.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    request.validate()?;
    let response = state.auth.authenticate(&request);
    Ok(Json(response))
}
