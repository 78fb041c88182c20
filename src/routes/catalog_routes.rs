//! Catálogos de opciones cerradas
//!
//! Listas fijas que el dashboard usa para poblar sus selects. El storage
//! no fuerza pertenencia; el boundary de la request sí.

use axum::{routing::get, Json, Router};

use crate::models::vehicle::{VehicleStatus, CONSULTANTS, MECHANICS};
use crate::state::AppState;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(get_statuses))
        .route("/consultants", get(get_consultants))
        .route("/mechanics", get(get_mechanics))
}

/// Pipeline de estados en orden de display
async fn get_statuses() -> Json<Vec<&'static str>> {
    Json(VehicleStatus::labels())
}

async fn get_consultants() -> Json<Vec<&'static str>> {
    Json(CONSULTANTS.to_vec())
}

async fn get_mechanics() -> Json<Vec<&'static str>> {
    Json(MECHANICS.to_vec())
}
