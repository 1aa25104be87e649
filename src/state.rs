//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El store concreto se inyecta al arrancar;
//! los handlers solo conocen la capability `VehicleStore`.

use std::sync::Arc;

use crate::repositories::VehicleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VehicleStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }
}
