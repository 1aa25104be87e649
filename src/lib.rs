//! Vehicle Rental API
//!
//! Librería del servicio: construye el router de Axum sobre un `AppState`
//! con el `VehicleStore` inyectado. El binario hace el bootstrap real;
//! los tests de integración montan este mismo router con el store en memoria.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construye el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/vehicles",
            routes::vehicle_routes::create_vehicle_router(),
        )
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-rental-api"
    }))
}
