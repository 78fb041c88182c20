//! Controller de vehículos
//!
//! Valida la entrada antes de que llegue al storage (la UI original
//! restringía los valores con selects; acá esa restricción vive en el
//! boundary de la request) y mapea a DTOs. El repositorio en sí acepta
//! texto arbitrario.

use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AffectedRowsResponse, CreateVehicleRequest, UpdateAssignmentRequest, UpdateStatusRequest,
    VehicleFilters, VehicleResponse,
};
use crate::models::vehicle::{VehicleStatus, CONSULTANTS, MECHANICS};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        validate_vehicle_name(&request.vehicle)?;
        validate_status(&request.status)?;
        validate_consultant(&request.consultant)?;
        validate_mechanic(&request.mechanic)?;

        // Sin chequeo de duplicados: el taller puede atender dos modelos iguales
        let vehicle = self
            .repository
            .create(
                request.vehicle.trim(),
                &request.consultant,
                &request.mechanic,
                &request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo registrado exitosamente".to_string(),
        ))
    }

    /// Listado con a lo sumo un filtro de igualdad exacta
    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let provided = [&filters.status, &filters.consultant, &filters.mechanic]
            .iter()
            .filter(|f| f.is_some())
            .count();
        if provided > 1 {
            return Err(AppError::BadRequest(
                "Use a lo sumo un filtro: status, consultant o mechanic".to_string(),
            ));
        }

        let vehicles = if let Some(status) = filters.status {
            self.repository.list_by_status(&status).await?
        } else if let Some(consultant) = filters.consultant {
            self.repository.list_by_consultant(&consultant).await?
        } else if let Some(mechanic) = filters.mechanic {
            self.repository.list_by_mechanic(&mechanic).await?
        } else {
            self.repository.list_all().await?
        };

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        vehicle: String,
        request: UpdateStatusRequest,
    ) -> Result<ApiResponse<AffectedRowsResponse>, AppError> {
        request.validate()?;
        validate_vehicle_name(&vehicle)?;
        validate_status(&request.status)?;

        let rows_affected = self.repository.update_status(&vehicle, &request.status).await?;

        Ok(ApiResponse::success_with_message(
            AffectedRowsResponse { vehicle, rows_affected },
            "Status actualizado exitosamente".to_string(),
        ))
    }

    pub async fn update_assignment(
        &self,
        vehicle: String,
        request: UpdateAssignmentRequest,
    ) -> Result<ApiResponse<AffectedRowsResponse>, AppError> {
        request.validate()?;
        validate_vehicle_name(&vehicle)?;
        validate_status(&request.status)?;
        validate_consultant(&request.consultant)?;
        validate_mechanic(&request.mechanic)?;

        let rows_affected = self
            .repository
            .update_assignment(&vehicle, &request.consultant, &request.mechanic, &request.status)
            .await?;

        Ok(ApiResponse::success_with_message(
            AffectedRowsResponse { vehicle, rows_affected },
            "Consultor, mecánico y status actualizados exitosamente".to_string(),
        ))
    }

    pub async fn delete(
        &self,
        vehicle: String,
    ) -> Result<ApiResponse<AffectedRowsResponse>, AppError> {
        validate_vehicle_name(&vehicle)?;

        let rows_affected = self.repository.delete(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            AffectedRowsResponse { vehicle, rows_affected },
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }
}

fn validate_vehicle_name(vehicle: &str) -> Result<(), AppError> {
    if vehicle.trim().is_empty() {
        return Err(AppError::BadRequest("El nombre del vehículo es requerido".to_string()));
    }
    Ok(())
}

fn validate_status(status: &str) -> Result<(), AppError> {
    if VehicleStatus::parse(status).is_none() {
        return Err(AppError::BadRequest(format!(
            "Status desconocido '{}'. Valores válidos: {}",
            status,
            VehicleStatus::labels().join(", ")
        )));
    }
    Ok(())
}

fn validate_consultant(consultant: &str) -> Result<(), AppError> {
    if !CONSULTANTS.contains(&consultant) {
        return Err(AppError::BadRequest(format!("Consultor desconocido '{}'", consultant)));
    }
    Ok(())
}

fn validate_mechanic(mechanic: &str) -> Result<(), AppError> {
    if !MECHANICS.contains(&mechanic) {
        return Err(AppError::BadRequest(format!("Mecánico desconocido '{}'", mechanic)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;

    async fn test_controller() -> VehicleController {
        let pool = create_memory_pool().await.expect("memory pool");
        let controller = VehicleController::new(pool.clone());
        VehicleRepository::new(pool).ensure_schema().await.expect("schema");
        controller
    }

    #[tokio::test]
    async fn test_create_rejects_blank_vehicle_name() {
        let controller = test_controller().await;
        let result = controller
            .create(CreateVehicleRequest {
                vehicle: "   ".to_string(),
                consultant: "Rafael".to_string(),
                mechanic: "Vini".to_string(),
                status: "Queued".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_status() {
        let controller = test_controller().await;
        let result = controller
            .create(CreateVehicleRequest {
                vehicle: "Civic".to_string(),
                consultant: "Rafael".to_string(),
                mechanic: "Vini".to_string(),
                status: "Parked".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_staff_outside_closed_lists() {
        let controller = test_controller().await;
        let result = controller
            .create(CreateVehicleRequest {
                vehicle: "Civic".to_string(),
                consultant: "Nadie".to_string(),
                mechanic: "Vini".to_string(),
                status: "Queued".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_list_rejects_combined_filters() {
        let controller = test_controller().await;
        let result = controller
            .list(VehicleFilters {
                status: Some("Queued".to_string()),
                consultant: Some("Rafael".to_string()),
                mechanic: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_create_then_list_single_filter() {
        let controller = test_controller().await;
        controller
            .create(CreateVehicleRequest {
                vehicle: "Civic".to_string(),
                consultant: "Rafael".to_string(),
                mechanic: "Vini".to_string(),
                status: "Queued".to_string(),
            })
            .await
            .unwrap();

        let listed = controller
            .list(VehicleFilters {
                status: Some("Queued".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].vehicle, "Civic");
    }

    #[tokio::test]
    async fn test_update_status_missing_vehicle_reports_zero_rows() {
        let controller = test_controller().await;
        let response = controller
            .update_status(
                "Fantasma".to_string(),
                UpdateStatusRequest { status: "Quote".to_string() },
            )
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().rows_affected, 0);
    }
}
