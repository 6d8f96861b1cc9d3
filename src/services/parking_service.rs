//! Servicio de asignación de plazas y facturación
//!
//! Empareja cada vehículo entrante con la primera plaza libre compatible,
//! mantiene el estado de ocupación y calcula la tarifa al salir.
//! Check-in, check-out y los cambios administrativos se serializan con un
//! único lock: dos vehículos nunca reciben la misma plaza.

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::environment::ParkingRates;
use crate::models::car::Car;
use crate::models::parking_spot::{ParkingSpot, ParkingStatus, VehicleSize};
use crate::repositories::car_repository::CarRepository;
use crate::repositories::parking_spot_repository::ParkingSpotRepository;
use crate::utils::clock::Clock;
use crate::utils::errors::{
    car_not_found_error, internal_error, invalid_input_error, spot_not_found_error, AppError,
    AppResult,
};
use crate::utils::validation::{require_license_plate, validate_not_blank};

pub struct ParkingService {
    spot_repository: Arc<ParkingSpotRepository>,
    car_repository: Arc<CarRepository>,
    rates: ParkingRates,
    clock: Arc<dyn Clock>,
    allocation_lock: Mutex<()>,
}

impl ParkingService {
    pub fn new(
        spot_repository: Arc<ParkingSpotRepository>,
        car_repository: Arc<CarRepository>,
        rates: ParkingRates,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            spot_repository,
            car_repository,
            rates,
            clock,
            allocation_lock: Mutex::new(()),
        }
    }

    // Las secciones críticas no dejan estado a medias, así que un lock
    // envenenado se puede seguir usando.
    fn lock_allocation(&self) -> MutexGuard<'_, ()> {
        self.allocation_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_all_spots(&self) -> Vec<ParkingSpot> {
        self.spot_repository.find_all()
    }

    pub fn get_available_spots(&self) -> Vec<ParkingSpot> {
        self.spot_repository.find_all_available()
    }

    pub fn active_car_count(&self) -> usize {
        self.car_repository.count()
    }

    /// Dar de alta una plaza nueva, siempre libre
    pub fn create_spot(&self, spot: ParkingSpot) -> AppResult<ParkingSpot> {
        validate_not_blank(&spot.id).map_err(|_| invalid_input_error("Spot id cannot be null or empty"))?;
        if spot.level == 0 || spot.number == 0 {
            return Err(invalid_input_error("Spot level and number must be positive"));
        }

        let _guard = self.lock_allocation();

        if self.spot_repository.exists_by_id(&spot.id) {
            return Err(AppError::SpotAlreadyExists(format!(
                "Spot with id {} already exists",
                spot.id
            )));
        }

        let created = self
            .spot_repository
            .save(spot.with_status(ParkingStatus::Available));
        log::info!("🅿️ Plaza {} creada (nivel {}, {})", created.id, created.level, created.size);
        Ok(created)
    }

    /// Forzar el estado de una plaza, sin comprobar compatibilidad ni vehículos
    pub fn update_spot_status(&self, spot_id: &str, status: ParkingStatus) -> AppResult<ParkingSpot> {
        let _guard = self.lock_allocation();

        let spot = self
            .spot_repository
            .find_by_id(spot_id)
            .ok_or_else(|| spot_not_found_error(spot_id))?;

        let updated = self.spot_repository.save(spot.with_status(status));
        log::info!("🔧 Plaza {} forzada a {:?}", spot_id, status);
        Ok(updated)
    }

    pub fn check_in(&self, license_plate: Option<&str>, size: Option<VehicleSize>) -> AppResult<Car> {
        let license_plate = require_license_plate(license_plate)?;
        let size = size.ok_or_else(|| invalid_input_error("Vehicle size cannot be null"))?;

        let _guard = self.lock_allocation();

        if self.car_repository.find_by_license_plate(license_plate).is_some() {
            return Err(invalid_input_error(&format!(
                "Car with license plate {} is already checked in",
                license_plate
            )));
        }

        let spot = self.find_compatible_spot(size)?;
        self.spot_repository.save(spot.with_status(ParkingStatus::Occupied));

        let car = Car::new(license_plate, spot.id.as_str(), self.clock.now(), size);
        log::info!("🚗 Check-in {} ({}) en plaza {}", license_plate, size, spot.id);
        Ok(self.car_repository.save(car))
    }

    /// Sacar el vehículo y devolver la tarifa cobrada
    pub fn check_out(&self, license_plate: Option<&str>) -> AppResult<f64> {
        let license_plate = require_license_plate(license_plate)?;

        let _guard = self.lock_allocation();

        let car = self
            .car_repository
            .find_by_license_plate(license_plate)
            .ok_or_else(|| car_not_found_error(license_plate))?;

        let spot = match self.spot_repository.find_by_id(&car.assigned_spot_id) {
            Some(spot) => spot,
            None => {
                log::error!(
                    "❌ Inconsistencia: {} apunta a la plaza inexistente {}",
                    license_plate,
                    car.assigned_spot_id
                );
                return Err(internal_error("Assigned spot not found, data inconsistency"));
            }
        };

        let rate = self.rate_for(&spot);
        let fee = calculate_fee(car.check_in_at, self.clock.now(), rate);

        self.spot_repository.save(spot.with_status(ParkingStatus::Available));
        self.car_repository.delete_by_license_plate(license_plate);

        log::info!("🏁 Check-out {} de plaza {}: {:.2}", license_plate, spot.id, fee);
        Ok(fee)
    }

    pub fn find_car_by_license_plate(&self, license_plate: Option<&str>) -> AppResult<Car> {
        let license_plate = require_license_plate(license_plate)?;

        self.car_repository
            .find_by_license_plate(license_plate)
            .ok_or_else(|| car_not_found_error(license_plate))
    }

    /// Primera plaza libre compatible, en el orden del almacén
    fn find_compatible_spot(&self, size: VehicleSize) -> AppResult<ParkingSpot> {
        let available = self.spot_repository.find_all_available();
        if available.is_empty() {
            return Err(AppError::GarageFull("No available spots in the garage".to_string()));
        }

        available
            .into_iter()
            .find(|spot| size.fits_in(spot.size))
            .ok_or_else(|| {
                AppError::NoCompatibleSpot(format!("No compatible spot available for size {}", size))
            })
    }

    fn rate_for(&self, spot: &ParkingSpot) -> f64 {
        if spot.has_ev_charging() {
            self.rates.premium_rate
        } else {
            self.rates.hourly_rate
        }
    }
}

/// Tarifa de una estancia: minutos completos pasados a horas, por la tarifa,
/// redondeado a céntimos (mitad hacia arriba).
///
/// Un reloj que retrocede cuenta como estancia de cero minutos.
pub fn calculate_fee(check_in_at: DateTime<Utc>, check_out_at: DateTime<Utc>, rate: f64) -> f64 {
    let minutes = (check_out_at - check_in_at).num_minutes().max(0);
    let hours = minutes as f64 / 60.0;
    round_to_cents(hours * rate)
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
