//! Lifecycle manager de vehículos
//!
//! Única pieza con reglas de negocio: valida la entrada, normaliza el precio
//! y delega en el `VehicleStore` inyectado. No guarda estado entre llamadas.

use std::sync::Arc;

use rust_decimal::Decimal;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::models::vehicle::{NewVehicle, VehiclePatch};
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<VehicleResponse> {
        // Mensaje único y genérico, sin enumerar qué campo falló
        request
            .validate()
            .map_err(|_| AppError::Validation("All fields are required".to_string()))?;

        let CreateVehicleRequest {
            vehicle_name: Some(vehicle_name),
            vehicle_type: Some(vehicle_type),
            registration_number: Some(registration_number),
            daily_rent_price: Some(daily_rent_price),
            availability_status: Some(availability_status),
        } = request
        else {
            return Err(AppError::Validation("All fields are required".to_string()));
        };

        // 0 es un precio válido; solo la ausencia se rechaza
        let daily_rent_price = Decimal::from_f64_retain(daily_rent_price)
            .ok_or_else(|| AppError::Validation("Invalid daily rent price".to_string()))?;

        let vehicle = self
            .store
            .insert(NewVehicle {
                vehicle_name,
                vehicle_type,
                registration_number,
                daily_rent_price,
                availability_status,
            })
            .await?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.store.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<VehicleResponse> {
        let vehicle = self.store.find_by_id(id).await?;
        Ok(vehicle.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateVehicleRequest,
    ) -> AppResult<VehicleResponse> {
        // Sin validación de campos: cualquier subconjunto se aplica tal cual
        let daily_rent_price = match request.daily_rent_price {
            Some(price) => Some(
                Decimal::from_f64_retain(price)
                    .ok_or_else(|| AppError::Validation("Invalid daily rent price".to_string()))?,
            ),
            None => None,
        };

        let vehicle = self
            .store
            .update(
                id,
                VehiclePatch {
                    vehicle_name: request.vehicle_name,
                    vehicle_type: request.vehicle_type,
                    registration_number: request.registration_number,
                    daily_rent_price,
                    availability_status: request.availability_status,
                },
            )
            .await?;

        Ok(vehicle.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryVehicleStore;

    fn controller() -> VehicleController {
        VehicleController::new(Arc::new(InMemoryVehicleStore::new()))
    }

    fn valid_request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            vehicle_name: Some("Van1".to_string()),
            vehicle_type: Some("van".to_string()),
            registration_number: Some("REG001".to_string()),
            daily_rent_price: Some(0.0),
            availability_status: Some("available".to_string()),
        }
    }

    #[tokio::test]
    async fn zero_price_is_accepted() {
        let controller = controller();

        let created = controller.create(valid_request()).await.unwrap();

        assert_eq!(created.daily_rent_price, 0.0);
        assert_eq!(created.vehicle_name, "Van1");
        assert_eq!(created.vehicle_type, "van");
    }

    #[tokio::test]
    async fn absent_price_is_rejected() {
        let controller = controller();
        let mut request = valid_request();
        request.daily_rent_price = None;

        let err = controller.create(request).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ref msg) if msg == "All fields are required"
        ));
    }

    #[tokio::test]
    async fn missing_type_is_rejected() {
        let controller = controller();
        let mut request = valid_request();
        request.vehicle_type = None;

        let err = controller.create(request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let controller = controller();
        let mut request = valid_request();
        request.vehicle_name = Some(String::new());

        let err = controller.create(request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn created_vehicle_round_trips_by_id() {
        let controller = controller();

        let created = controller.create(valid_request()).await.unwrap();
        let fetched = controller.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.vehicle_name, created.vehicle_name);
        assert_eq!(fetched.registration_number, created.registration_number);
        assert_eq!(fetched.daily_rent_price, created.daily_rent_price);
    }

    #[tokio::test]
    async fn partial_update_is_idempotent_and_preserves_fields() {
        let controller = controller();
        let created = controller.create(valid_request()).await.unwrap();

        let patch = || UpdateVehicleRequest {
            vehicle_name: None,
            vehicle_type: None,
            registration_number: None,
            daily_rent_price: Some(50.0),
            availability_status: None,
        };

        let once = controller.update(created.id, patch()).await.unwrap();
        let twice = controller.update(created.id, patch()).await.unwrap();

        assert_eq!(once.daily_rent_price, 50.0);
        assert_eq!(twice.daily_rent_price, 50.0);
        assert_eq!(twice.vehicle_name, created.vehicle_name);
        assert_eq!(twice.vehicle_type, created.vehicle_type);
        assert_eq!(twice.availability_status, created.availability_status);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let controller = controller();
        let created = controller.create(valid_request()).await.unwrap();

        controller.delete(created.id).await.unwrap();

        let err = controller.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_on_empty_store_is_ok_and_empty() {
        let controller = controller();
        assert!(controller.list().await.unwrap().is_empty());
    }
}
