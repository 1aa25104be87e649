//! Controllers del sistema
//!
//! Orquestación y validación entre las rutas HTTP y los repositorios.

pub mod vehicle_controller;
