//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los almacenes se crean una sola vez aquí.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::config::garage_layout::default_layout;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::parking_spot_repository::ParkingSpotRepository;
use crate::services::parking_service::ParkingService;
use crate::utils::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub parking_service: Arc<ParkingService>,
}

impl AppState {
    /// Estado de producción: distribución por defecto y reloj del sistema
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: EnvironmentConfig, clock: Arc<dyn Clock>) -> Self {
        let spot_repository = Arc::new(ParkingSpotRepository::with_spots(default_layout()));
        let car_repository = Arc::new(CarRepository::new());

        log::info!("🅿️ Garaje inicializado con {} plazas", spot_repository.count());

        let parking_service = ParkingService::new(
            spot_repository,
            car_repository,
            config.rates,
            clock,
        );

        Self {
            config,
            parking_service: Arc::new(parking_service),
        }
    }
}
