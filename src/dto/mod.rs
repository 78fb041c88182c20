pub mod auth_dto;
pub mod vehicle_dto;
