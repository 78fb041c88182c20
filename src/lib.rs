//! Backend del dashboard de patio de taller
//!
//! API JSON para el seguimiento de vehículos dentro del workflow de
//! reparación de cinco etapas. El dashboard consume estos endpoints para
//! registrar, listar, reasignar y eliminar vehículos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::auth::auth_middleware;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    // Las rutas de vehículos requieren usuario autenticado
    let vehicle_routes = routes::vehicle_routes::create_vehicle_router()
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let cors = if state.config.cors_origins.iter().any(|o| o == "*") {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/catalog", routes::catalog_routes::create_catalog_router())
        .nest("/api/vehicle", vehicle_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "workshop-yard",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
