//! Repositorio de vehículos sobre PostgreSQL
//!
//! Este módulo define el contrato `VehicleStore` y su implementación de
//! producción. La unicidad del número de matrícula se verifica aquí, no en
//! el controller.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use crate::models::vehicle::{NewVehicle, Vehicle, VehiclePatch};
use crate::utils::errors::{AppError, AppResult};

/// Capability de persistencia que el controller recibe inyectada.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Persiste un registro nuevo y asigna un id único.
    async fn insert(&self, record: NewVehicle) -> AppResult<Vehicle>;

    /// Todos los registros; un store vacío devuelve un Vec vacío, no un error.
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Vehicle>;

    /// Aplica solo los campos presentes en el patch; el resto se conserva.
    async fn update(&self, id: i64, changes: VehiclePatch) -> AppResult<Vehicle>;

    /// Borrado duro, irreversible.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn registration_number_exists(&self, registration_number: &str) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE registration_number = $1)",
        )
        .bind(registration_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error checking registration number: {}", e);
            AppError::Storage(format!("Error checking registration number: {}", e))
        })?;

        Ok(result.0)
    }
}

#[async_trait]
impl VehicleStore for PgVehicleRepository {
    async fn insert(&self, record: NewVehicle) -> AppResult<Vehicle> {
        if self
            .registration_number_exists(&record.registration_number)
            .await?
        {
            return Err(AppError::Storage(format!(
                "Vehicle with registration number '{}' already exists",
                record.registration_number
            )));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vehicle_name, "type", registration_number, daily_rent_price, availability_status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(record.vehicle_name)
        .bind(record.vehicle_type)
        .bind(record.registration_number)
        .bind(record.daily_rent_price)
        .bind(record.availability_status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error creating vehicle: {}", e);
            AppError::Storage(format!("Error creating vehicle: {}", e))
        })?;

        Ok(vehicle)
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Error listing vehicles: {}", e);
                AppError::Storage(format!("Error listing vehicles: {}", e))
            })?;

        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Error finding vehicle: {}", e);
                AppError::Storage(format!("Error finding vehicle: {}", e))
            })?;

        vehicle.ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    async fn update(&self, id: i64, changes: VehiclePatch) -> AppResult<Vehicle> {
        // Obtener el registro actual; los campos ausentes del patch se conservan
        let current = self.find_by_id(id).await?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET vehicle_name = $2, "type" = $3, registration_number = $4, daily_rent_price = $5, availability_status = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.vehicle_name.unwrap_or(current.vehicle_name))
        .bind(changes.vehicle_type.unwrap_or(current.vehicle_type))
        .bind(changes.registration_number.unwrap_or(current.registration_number))
        .bind(changes.daily_rent_price.unwrap_or(current.daily_rent_price))
        .bind(changes.availability_status.unwrap_or(current.availability_status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error updating vehicle: {}", e);
            AppError::Storage(format!("Error updating vehicle: {}", e))
        })?;

        Ok(vehicle)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        // find_by_id produce NotFound si el id no existe
        self.find_by_id(id).await?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error deleting vehicle: {}", e);
                AppError::Storage(format!("Error deleting vehicle: {}", e))
            })?;

        Ok(())
    }
}
