//! Modelo de Car
//!
//! Registro de un vehículo dentro del garaje: existe desde el check-in
//! hasta el check-out y nunca se modifica en el sitio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parking_spot::VehicleSize;

/// Vehículo aparcado, asociado por id a exactamente una plaza ocupada
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub license_plate: String,
    pub assigned_spot_id: String,
    pub check_in_at: DateTime<Utc>,
    pub size: VehicleSize,
}

impl Car {
    pub fn new(
        license_plate: impl Into<String>,
        assigned_spot_id: impl Into<String>,
        check_in_at: DateTime<Utc>,
        size: VehicleSize,
    ) -> Self {
        Self {
            license_plate: license_plate.into(),
            assigned_spot_id: assigned_spot_id.into(),
            check_in_at,
            size,
        }
    }
}
