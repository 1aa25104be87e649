use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para crear un vehículo.
// Todos los campos son Option para que la presencia la valide el controller
// y no el deserializador; los length(min = 1) rechazan strings vacíos.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1))]
    pub vehicle_name: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub vehicle_type: Option<String>,

    #[validate(length(min = 1))]
    pub registration_number: Option<String>,

    pub daily_rent_price: Option<f64>,

    #[validate(length(min = 1))]
    pub availability_status: Option<String>,
}

// Request para actualizar un vehículo: cualquier subconjunto de campos
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub vehicle_name: Option<String>,

    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,

    pub registration_number: Option<String>,

    pub daily_rent_price: Option<f64>,

    pub availability_status: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub vehicle_name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub registration_number: String,
    pub daily_rent_price: f64,
    pub availability_status: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_name: vehicle.vehicle_name,
            vehicle_type: vehicle.vehicle_type,
            registration_number: vehicle.registration_number,
            daily_rent_price: vehicle.daily_rent_price.to_string().parse().unwrap_or(0.0),
            availability_status: vehicle.availability_status,
        }
    }
}
