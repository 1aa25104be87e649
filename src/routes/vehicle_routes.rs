//! Rutas HTTP de vehículos
//!
//! Adaptador de transporte: parsea la entrada, invoca una operación del
//! controller y renderiza el envelope `ApiResponse`. El mapeo de status es
//! por operación y se preserva tal cual lo expone el contrato del API:
//! 404 solo en el GET por id; update/delete fallan con 400; solo el listado
//! responde 500 ante un fallo de persistencia.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> (StatusCode, Json<ApiResponse<VehicleResponse>>) {
    let controller = VehicleController::new(state.store.clone());
    match controller.create(request).await {
        Ok(vehicle) => (
            StatusCode::CREATED,
            Json(ApiResponse::success_with_message(
                vehicle,
                "Vehicle created successfully".to_string(),
            )),
        ),
        Err(err @ AppError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(
                "Missing required fields".to_string(),
                err.to_string(),
            )),
        ),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(
                "Error creating vehicle".to_string(),
                err.to_string(),
            )),
        ),
    }
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<VehicleResponse>>>) {
    let controller = VehicleController::new(state.store.clone());
    match controller.list().await {
        Ok(vehicles) => {
            let message = if vehicles.is_empty() {
                "No vehicles found"
            } else {
                "Vehicles retrieved successfully"
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success_with_message(
                    vehicles,
                    message.to_string(),
                )),
            )
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure(
                "Error retrieving vehicles".to_string(),
                err.to_string(),
            )),
        ),
    }
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<VehicleResponse>>) {
    let controller = VehicleController::new(state.store.clone());
    match controller.get_by_id(id).await {
        Ok(vehicle) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message(
                vehicle,
                "Vehicle retrieved successfully".to_string(),
            )),
        ),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::failure(
                "Vehicle not found".to_string(),
                err.to_string(),
            )),
        ),
    }
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> (StatusCode, Json<ApiResponse<VehicleResponse>>) {
    let controller = VehicleController::new(state.store.clone());
    match controller.update(id, request).await {
        Ok(vehicle) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message(
                vehicle,
                "Vehicle updated successfully".to_string(),
            )),
        ),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(
                "Error updating vehicle".to_string(),
                err.to_string(),
            )),
        ),
    }
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let controller = VehicleController::new(state.store.clone());
    match controller.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success_message(
                "Vehicle deleted successfully".to_string(),
            )),
        ),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(
                "Error deleting vehicle".to_string(),
                err.to_string(),
            )),
        ),
    }
}
