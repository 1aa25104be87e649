//! Store de vehículos en memoria
//!
//! Sustituto del backend PostgreSQL para la suite de tests: misma semántica
//! de ids, unicidad y patches, sin base de datos.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::vehicle_repository::VehicleStore;
use crate::models::vehicle::{NewVehicle, Vehicle, VehiclePatch};
use crate::utils::errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: RwLock<Vec<Vehicle>>,
    next_id: AtomicI64,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn insert(&self, record: NewVehicle) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;

        if vehicles
            .iter()
            .any(|v| v.registration_number == record.registration_number)
        {
            return Err(AppError::Storage(format!(
                "Vehicle with registration number '{}' already exists",
                record.registration_number
            )));
        }

        let vehicle = Vehicle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            vehicle_name: record.vehicle_name,
            vehicle_type: record.vehicle_type,
            registration_number: record.registration_number,
            daily_rent_price: record.daily_rent_price,
            availability_status: record.availability_status,
        };
        vehicles.push(vehicle.clone());

        Ok(vehicle)
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.vehicles.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Vehicle> {
        self.vehicles
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    async fn update(&self, id: i64, changes: VehiclePatch) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if let Some(vehicle_name) = changes.vehicle_name {
            vehicle.vehicle_name = vehicle_name;
        }
        if let Some(vehicle_type) = changes.vehicle_type {
            vehicle.vehicle_type = vehicle_type;
        }
        if let Some(registration_number) = changes.registration_number {
            vehicle.registration_number = registration_number;
        }
        if let Some(daily_rent_price) = changes.daily_rent_price {
            vehicle.daily_rent_price = daily_rent_price;
        }
        if let Some(availability_status) = changes.availability_status {
            vehicle.availability_status = availability_status;
        }

        Ok(vehicle.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;
        let index = vehicles
            .iter()
            .position(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        vehicles.remove(index);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(name: &str, registration_number: &str) -> NewVehicle {
        NewVehicle {
            vehicle_name: name.to_string(),
            vehicle_type: "car".to_string(),
            registration_number: registration_number.to_string(),
            daily_rent_price: Decimal::new(4500, 2),
            availability_status: "available".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_unique_ids() {
        let store = InMemoryVehicleStore::new();

        let first = store.insert(record("Van1", "REG001")).await.unwrap();
        let second = store.insert(record("Van2", "REG002")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.vehicle_name, "Van1");
        assert_eq!(second.vehicle_name, "Van2");
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let store = InMemoryVehicleStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_number_is_rejected() {
        let store = InMemoryVehicleStore::new();
        store.insert(record("Van1", "REG001")).await.unwrap();

        let err = store.insert(record("Van2", "REG001")).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = InMemoryVehicleStore::new();
        let created = store.insert(record("Van1", "REG001")).await.unwrap();

        let patch = VehiclePatch {
            daily_rent_price: Some(Decimal::new(5000, 2)),
            ..VehiclePatch::default()
        };
        let updated = store.update(created.id, patch).await.unwrap();

        assert_eq!(updated.daily_rent_price, Decimal::new(5000, 2));
        assert_eq!(updated.vehicle_name, created.vehicle_name);
        assert_eq!(updated.vehicle_type, created.vehicle_type);
        assert_eq!(updated.registration_number, created.registration_number);
        assert_eq!(updated.availability_status, created.availability_status);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryVehicleStore::new();
        let created = store.insert(record("Van1", "REG001")).await.unwrap();

        store.delete(created.id).await.unwrap();

        let err = store.find_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn operations_on_unknown_id_are_not_found() {
        let store = InMemoryVehicleStore::new();

        assert!(matches!(
            store.find_by_id(42).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.update(42, VehiclePatch::default()).await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.delete(42).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
