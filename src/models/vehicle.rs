//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD
//! operations. Mapea exactamente al schema PostgreSQL con primary key 'id'.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub registration_number: String,
    pub daily_rent_price: Decimal,
    pub availability_status: String,
}

/// Registro nuevo, todavía sin id asignado
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub registration_number: String,
    pub daily_rent_price: Decimal,
    pub availability_status: String,
}

/// Cambios parciales sobre un vehículo existente.
///
/// Un campo `None` significa "no tocar"; el id nunca se modifica.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub vehicle_name: Option<String>,
    pub vehicle_type: Option<String>,
    pub registration_number: Option<String>,
    pub daily_rent_price: Option<Decimal>,
    pub availability_status: Option<String>,
}
