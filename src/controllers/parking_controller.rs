use std::sync::Arc;
use validator::Validate;

use crate::dto::parking_dto::{
    CheckInRequest, CheckOutRequest, CheckOutResponse, CreateSpotRequest, HealthResponse,
    UpdateSpotStatusRequest,
};
use crate::models::car::Car;
use crate::models::parking_spot::ParkingSpot;
use crate::services::parking_service::ParkingService;
use crate::utils::errors::{invalid_input_error, AppError};

pub struct ParkingController {
    service: Arc<ParkingService>,
}

impl ParkingController {
    pub fn new(service: Arc<ParkingService>) -> Self {
        Self { service }
    }

    pub fn list_spots(&self) -> Vec<ParkingSpot> {
        self.service.get_all_spots()
    }

    pub fn list_available_spots(&self) -> Vec<ParkingSpot> {
        self.service.get_available_spots()
    }

    pub fn create_spot(&self, request: CreateSpotRequest) -> Result<ParkingSpot, AppError> {
        request.validate()?;

        // `validate` ya exige el tamaño; se comprueba de nuevo para no usar unwrap
        let size = request
            .size
            .ok_or_else(|| invalid_input_error("Spot size cannot be null"))?;

        let spot = ParkingSpot::new(request.id, request.level, request.number, size, request.features);
        self.service.create_spot(spot)
    }

    pub fn update_spot_status(
        &self,
        spot_id: &str,
        request: UpdateSpotStatusRequest,
    ) -> Result<ParkingSpot, AppError> {
        self.service.update_spot_status(spot_id, request.status)
    }

    pub fn check_in(&self, request: CheckInRequest) -> Result<Car, AppError> {
        self.service
            .check_in(request.license_plate.as_deref(), request.size)
    }

    pub fn check_out(&self, request: CheckOutRequest) -> Result<CheckOutResponse, AppError> {
        let fee = self.service.check_out(request.license_plate.as_deref())?;

        Ok(CheckOutResponse {
            message: "Check-out successful".to_string(),
            license_plate: request.license_plate.unwrap_or_default(),
            fee,
        })
    }

    pub fn find_car(&self, license_plate: &str) -> Result<Car, AppError> {
        self.service.find_car_by_license_plate(Some(license_plate))
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            service: "garage-parking".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            total_spots: self.service.get_all_spots().len(),
            available_spots: self.service.get_available_spots().len(),
            active_cars: self.service.active_car_count(),
        }
    }
}
