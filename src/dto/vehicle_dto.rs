use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para registrar un vehículo en el patio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub vehicle: String,
    #[validate(length(min = 1, max = 50))]
    pub consultant: String,
    #[validate(length(min = 1, max = 50))]
    pub mechanic: String,
    #[validate(length(min = 1, max = 30))]
    pub status: String,
}

// Request para cambiar solo el status (keyed por nombre de vehículo)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, max = 30))]
    pub status: String,
}

// Request para reasignar consultor, mecánico y status en una sola operación
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssignmentRequest {
    #[validate(length(min = 1, max = 50))]
    pub consultant: String,
    #[validate(length(min = 1, max = 50))]
    pub mechanic: String,
    #[validate(length(min = 1, max = 30))]
    pub status: String,
}

// Filtros de listado: exact-match, a lo sumo uno a la vez
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<String>,
    pub consultant: Option<String>,
    pub mechanic: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub vehicle: String,
    pub consultant: String,
    pub mechanic: String,
    pub status: String,
}

impl From<crate::models::vehicle::Vehicle> for VehicleResponse {
    fn from(v: crate::models::vehicle::Vehicle) -> Self {
        Self {
            id: v.id,
            vehicle: v.vehicle,
            consultant: v.consultant,
            mechanic: v.mechanic,
            status: v.status,
        }
    }
}

// Response de operaciones de escritura keyed por nombre: cuántas filas tocó.
// Cero filas afectadas es un no-op silencioso, no un error.
#[derive(Debug, Serialize)]
pub struct AffectedRowsResponse {
    pub vehicle: String,
    pub rows_affected: u64,
}
