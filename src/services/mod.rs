//! Services module
//!
//! Este módulo contiene la lógica de negocio del garaje: asignación de
//! plazas, control de ocupación y cálculo de tarifas.

pub mod parking_service;

pub use parking_service::*;
