use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use tracing::info;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AffectedRowsResponse, CreateVehicleRequest, UpdateAssignmentRequest, UpdateStatusRequest,
    VehicleFilters, VehicleResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:name", put(update_assignment))
        .route("/:name", delete(delete_vehicle))
        .route("/:name/status", put(update_status))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> AppResult<Json<ApiResponse<VehicleResponse>>> {
    info!("🚙 {} registra vehículo '{}'", user.username, request.vehicle);
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<AffectedRowsResponse>>> {
    info!("🔧 {} cambia status de '{}' a '{}'", user.username, name, request.status);
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_status(name, request).await?;
    Ok(Json(response))
}

async fn update_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
    Json(request): Json<UpdateAssignmentRequest>,
) -> AppResult<Json<ApiResponse<AffectedRowsResponse>>> {
    info!("👨‍🔧 {} reasigna '{}'", user.username, name);
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_assignment(name, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> AppResult<Json<ApiResponse<AffectedRowsResponse>>> {
    info!("🗑️ {} elimina '{}'", user.username, name);
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(name).await?;
    Ok(Json(response))
}
