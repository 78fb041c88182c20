//! Repositorio de vehículos
//!
//! Capa de persistencia del patio: una sola tabla `vehicles` y el set
//! fijo de operaciones CRUD sobre ella. Las operaciones keyed por nombre
//! (`update_status`, `update_assignment`, `delete`) afectan a TODAS las
//! filas que comparten ese nombre: los duplicados son intencionales.

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Crear la tabla `vehicles` si no existe. Idempotente, se ejecuta
    /// en cada arranque del proceso.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id INTEGER PRIMARY KEY,
                vehicle TEXT NOT NULL,
                consultant TEXT NOT NULL,
                mechanic TEXT NOT NULL,
                status TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insertar una fila con id auto-asignado. Sin chequeo de duplicados.
    pub async fn create(
        &self,
        vehicle: &str,
        consultant: &str,
        mechanic: &str,
        status: &str,
    ) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vehicle, consultant, mechanic, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, vehicle, consultant, mechanic, status
            "#,
        )
        .bind(vehicle)
        .bind(consultant)
        .bind(mechanic)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Todas las filas, en orden de almacenamiento (sin ORDER BY explícito)
    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, vehicle, consultant, mechanic, status FROM vehicles",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Filtrado por status, igualdad exacta
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, vehicle, consultant, mechanic, status FROM vehicles WHERE status = ?",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Filtrado por consultor, igualdad exacta
    pub async fn list_by_consultant(&self, consultant: &str) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, vehicle, consultant, mechanic, status FROM vehicles WHERE consultant = ?",
        )
        .bind(consultant)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Filtrado por mecánico, igualdad exacta
    pub async fn list_by_mechanic(&self, mechanic: &str) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, vehicle, consultant, mechanic, status FROM vehicles WHERE mechanic = ?",
        )
        .bind(mechanic)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Cambiar el status de todas las filas que matchean el nombre.
    /// Cero filas afectadas no es un error.
    pub async fn update_status(&self, vehicle: &str, new_status: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE vehicles SET status = ? WHERE vehicle = ?")
            .bind(new_status)
            .bind(vehicle)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Reasignar consultor, mecánico y status en un solo statement,
    /// sobre todas las filas que matchean el nombre.
    pub async fn update_assignment(
        &self,
        vehicle: &str,
        new_consultant: &str,
        new_mechanic: &str,
        new_status: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE vehicles SET consultant = ?, mechanic = ?, status = ? WHERE vehicle = ?",
        )
        .bind(new_consultant)
        .bind(new_mechanic)
        .bind(new_status)
        .bind(vehicle)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Eliminar todas las filas que matchean el nombre. Sin archivado:
    /// la salida del taller borra el estado sin dejar historial.
    pub async fn delete(&self, vehicle: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE vehicle = ?")
            .bind(vehicle)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;

    async fn test_repository() -> VehicleRepository {
        let pool = create_memory_pool().await.expect("memory pool");
        let repo = VehicleRepository::new(pool);
        repo.ensure_schema().await.expect("schema");
        repo
    }

    fn fields(v: &Vehicle) -> (&str, &str, &str, &str) {
        (&v.vehicle, &v.consultant, &v.mechanic, &v.status)
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let repo = test_repository().await;
        repo.ensure_schema().await.expect("second call");
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_list_round_trip() {
        let repo = test_repository().await;
        repo.create("Civic", "Rafael", "Vini", "Queued").await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(fields(&all[0]), ("Civic", "Rafael", "Vini", "Queued"));

        // exact-match: un typo en el filtro no encuentra nada
        assert!(repo.list_by_status("Queored").await.unwrap().is_empty());
        let queued = repo.list_by_status("Queued").await.unwrap();
        assert_eq!(fields(&queued[0]), ("Civic", "Rafael", "Vini", "Queued"));
    }

    #[tokio::test]
    async fn test_update_assignment_rewrites_three_fields() {
        let repo = test_repository().await;
        repo.create("Golf", "Paulo", "Danilo", "Quote").await.unwrap();

        let affected = repo
            .update_assignment("Golf", "Samuel", "Fosco", "In Service")
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(fields(&all[0]), ("Golf", "Samuel", "Fosco", "In Service"));
    }

    #[tokio::test]
    async fn test_update_status_zero_matches_is_noop() {
        let repo = test_repository().await;
        repo.create("Uno", "Rudimar", "Valdo", "Queued").await.unwrap();

        let affected = repo.update_status("Fusca", "In Service").await.unwrap();
        assert_eq!(affected, 0);

        let all = repo.list_all().await.unwrap();
        assert_eq!(fields(&all[0]), ("Uno", "Rudimar", "Valdo", "Queued"));
    }

    #[tokio::test]
    async fn test_update_status_hits_every_duplicate() {
        let repo = test_repository().await;
        repo.create("Gol", "Rafael", "Vini", "Queued").await.unwrap();
        repo.create("Gol", "Paulo", "Weslei", "Quote").await.unwrap();

        let affected = repo.update_status("Gol", "Ready for Pickup").await.unwrap();
        assert_eq!(affected, 2);

        for v in repo.list_all().await.unwrap() {
            assert_eq!(v.status, "Ready for Pickup");
        }
    }

    #[tokio::test]
    async fn test_delete_removes_all_duplicates_and_leaves_others() {
        let repo = test_repository().await;
        repo.create("Gol", "Rafael", "Vini", "Queued").await.unwrap();
        repo.create("Gol", "Paulo", "Weslei", "Quote").await.unwrap();
        repo.create("Civic", "Samuel", "Fosco", "In Service").await.unwrap();

        let affected = repo.delete("Gol").await.unwrap();
        assert_eq!(affected, 2);

        let rest = repo.list_all().await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].vehicle, "Civic");

        // delete de algo inexistente: no-op silencioso
        assert_eq!(repo.delete("Gol").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_filters_return_exact_subsets() {
        let repo = test_repository().await;
        repo.create("Civic", "Rafael", "Vini", "Queued").await.unwrap();
        repo.create("Golf", "Rafael", "Danilo", "Quote").await.unwrap();
        repo.create("Uno", "Paulo", "Vini", "Queued").await.unwrap();

        let by_consultant = repo.list_by_consultant("Rafael").await.unwrap();
        assert_eq!(by_consultant.len(), 2);
        assert!(by_consultant.iter().all(|v| v.consultant == "Rafael"));

        let by_mechanic = repo.list_by_mechanic("Vini").await.unwrap();
        assert_eq!(by_mechanic.len(), 2);
        assert!(by_mechanic.iter().all(|v| v.mechanic == "Vini"));

        let by_status = repo.list_by_status("Quote").await.unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].vehicle, "Golf");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = test_repository().await;
        repo.create("Civic", "Rafael", "Vini", "Queued").await.unwrap();
        repo.create("Golf", "Paulo", "Danilo", "Quote").await.unwrap();
        repo.create("Uno", "Samuel", "Fosco", "Queued").await.unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.vehicle)
            .collect();
        assert_eq!(names, vec!["Civic", "Golf", "Uno"]);
    }
}
