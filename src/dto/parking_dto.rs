use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::parking_spot::{ParkingStatus, VehicleSize};
use crate::utils::validation::validate_not_blank;

// Request de check-in; los campos ausentes se rechazan en el servicio
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub license_plate: Option<String>,
    pub size: Option<VehicleSize>,
}

// Request de check-out
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    pub license_plate: Option<String>,
}

// Response de check-out con la tarifa cobrada
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutResponse {
    pub message: String,
    pub license_plate: String,
    pub fee: f64,
}

// Request para forzar el estado de una plaza
#[derive(Debug, Deserialize)]
pub struct UpdateSpotStatusRequest {
    pub status: ParkingStatus,
}

/// Request para dar de alta una plaza nueva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSpotRequest {
    #[validate(custom = "validate_not_blank")]
    pub id: String,

    #[validate(range(min = 1))]
    pub level: u32,

    #[validate(range(min = 1))]
    pub number: u32,

    #[validate(required)]
    pub size: Option<VehicleSize>,

    #[serde(default)]
    pub features: Vec<String>,
}

// Response del health check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub total_spots: usize,
    pub available_spots: usize,
    pub active_cars: usize,
}
