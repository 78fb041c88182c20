pub mod auth_routes;
pub mod catalog_routes;
pub mod vehicle_routes;
