//! Garage Parking Service
//!
//! Servicio de un único garaje: asigna plazas a los vehículos que entran,
//! controla la ocupación y calcula la tarifa por tiempo al salir, con tarifa
//! premium en las plazas con cargador eléctrico.
//!
//! ## Endpoints
//!
//! - `GET  /api/v1/spots` - Todas las plazas
//! - `POST /api/v1/spots` - Crear plaza
//! - `GET  /api/v1/spots/available` - Plazas libres
//! - `PUT  /api/v1/spots/:id/status` - Forzar estado de una plaza
//! - `POST /api/v1/cars/check-in` - Entrada de vehículo
//! - `POST /api/v1/cars/check-out` - Salida y cobro
//! - `GET  /api/v1/cars/:license_plate` - Buscar vehículo
//! - `GET  /health` - Health check

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer;
use state::AppState;

/// Crear el router completo de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    routes::parking_routes::create_parking_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
