//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea a la tabla `vehicles`,
//! el pipeline de estados del taller y las listas cerradas de personal.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado del vehículo dentro del pipeline de taller (orden fijo de display)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Queued,
    Quote,
    AwaitingParts,
    InService,
    ReadyForPickup,
}

impl VehicleStatus {
    /// Pipeline completo, en el orden en que se muestra al usuario
    pub const ALL: [VehicleStatus; 5] = [
        VehicleStatus::Queued,
        VehicleStatus::Quote,
        VehicleStatus::AwaitingParts,
        VehicleStatus::InService,
        VehicleStatus::ReadyForPickup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Queued => "Queued",
            VehicleStatus::Quote => "Quote",
            VehicleStatus::AwaitingParts => "Awaiting Parts",
            VehicleStatus::InService => "In Service",
            VehicleStatus::ReadyForPickup => "Ready for Pickup",
        }
    }

    /// Parsear el label exacto tal como se almacena. Exact-match, sin normalizar.
    pub fn parse(s: &str) -> Option<VehicleStatus> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }

    /// Labels ordenados para poblar los selects de la UI
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

/// Consultores de servicio del taller (lista cerrada)
pub const CONSULTANTS: [&str; 5] = ["Rafael", "Rudimar", "Samuel", "Jéssica", "Paulo"];

/// Mecánicos del taller (lista cerrada)
pub const MECHANICS: [&str; 6] = ["Vini", "Valdo", "Danilo", "Fosco", "Szczhoca", "Weslei"];

/// Vehicle principal - mapea exactamente a la tabla vehicles
///
/// El campo `vehicle` es la clave natural de búsqueda en la práctica:
/// no hay unicidad, varias filas pueden compartir el mismo nombre.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle: String,
    pub consultant: String,
    pub mechanic: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pipeline_order() {
        assert_eq!(
            VehicleStatus::labels(),
            vec!["Queued", "Quote", "Awaiting Parts", "In Service", "Ready for Pickup"]
        );
    }

    #[test]
    fn test_status_parse_exact_match_only() {
        assert_eq!(VehicleStatus::parse("Queued"), Some(VehicleStatus::Queued));
        assert_eq!(VehicleStatus::parse("In Service"), Some(VehicleStatus::InService));
        // typo del caso de prueba Queored: no debe matchear
        assert_eq!(VehicleStatus::parse("Queored"), None);
        assert_eq!(VehicleStatus::parse("queued"), None);
        assert_eq!(VehicleStatus::parse(""), None);
    }

    #[test]
    fn test_staff_lists_are_closed_sets() {
        assert!(CONSULTANTS.contains(&"Jéssica"));
        assert!(MECHANICS.contains(&"Szczhoca"));
        assert!(!CONSULTANTS.contains(&"Vini"));
    }
}
