//! Modelo de ParkingSpot
//!
//! Este módulo contiene la plaza de aparcamiento, su estado de ocupación
//! y las clases de tamaño compartidas con los vehículos.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Etiqueta de las plazas con cargador para vehículos eléctricos
pub const EV_CHARGING: &str = "EV_CHARGING";

/// Estado de ocupación de una plaza
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParkingStatus {
    Available,
    Occupied,
}

/// Clase de tamaño, tanto de plazas como de vehículos
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleSize {
    Compact,
    Standard,
    Oversized,
}

impl VehicleSize {
    /// Indica si un vehículo de este tamaño cabe en una plaza de `spot_size`.
    ///
    /// La regla es asimétrica: una plaza nunca aloja un vehículo más grande
    /// que ella misma.
    pub fn fits_in(self, spot_size: VehicleSize) -> bool {
        match self {
            VehicleSize::Compact => true,
            VehicleSize::Standard => {
                matches!(spot_size, VehicleSize::Standard | VehicleSize::Oversized)
            }
            VehicleSize::Oversized => spot_size == VehicleSize::Oversized,
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleSize::Compact => "COMPACT",
            VehicleSize::Standard => "STANDARD",
            VehicleSize::Oversized => "OVERSIZED",
        };
        f.write_str(label)
    }
}

/// Plaza de aparcamiento
///
/// Valor inmutable: solo `status` cambia a lo largo de su vida, y siempre
/// construyendo un valor nuevo con [`ParkingSpot::with_status`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParkingSpot {
    pub id: String,
    pub level: u32,
    pub number: u32,
    pub status: ParkingStatus,
    pub size: VehicleSize,
    pub features: BTreeSet<String>,
}

impl ParkingSpot {
    /// Crear una plaza libre
    pub fn new<I, S>(id: impl Into<String>, level: u32, number: u32, size: VehicleSize, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            level,
            number,
            status: ParkingStatus::Available,
            size,
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    /// Copia de la plaza con otro estado; tamaño y equipamiento se conservan
    pub fn with_status(&self, status: ParkingStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == ParkingStatus::Available
    }

    pub fn has_ev_charging(&self) -> bool {
        self.features.contains(EV_CHARGING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_fits_every_spot() {
        assert!(VehicleSize::Compact.fits_in(VehicleSize::Compact));
        assert!(VehicleSize::Compact.fits_in(VehicleSize::Standard));
        assert!(VehicleSize::Compact.fits_in(VehicleSize::Oversized));
    }

    #[test]
    fn test_standard_needs_standard_or_bigger() {
        assert!(!VehicleSize::Standard.fits_in(VehicleSize::Compact));
        assert!(VehicleSize::Standard.fits_in(VehicleSize::Standard));
        assert!(VehicleSize::Standard.fits_in(VehicleSize::Oversized));
    }

    #[test]
    fn test_oversized_only_fits_oversized() {
        assert!(!VehicleSize::Oversized.fits_in(VehicleSize::Compact));
        assert!(!VehicleSize::Oversized.fits_in(VehicleSize::Standard));
        assert!(VehicleSize::Oversized.fits_in(VehicleSize::Oversized));
    }

    #[test]
    fn test_with_status_keeps_size_and_features() {
        let spot = ParkingSpot::new("C1", 3, 1, VehicleSize::Oversized, [EV_CHARGING, "COVERED"]);
        let occupied = spot.with_status(ParkingStatus::Occupied);

        assert_eq!(occupied.status, ParkingStatus::Occupied);
        assert_eq!(occupied.size, spot.size);
        assert_eq!(occupied.features, spot.features);
        assert!(occupied.has_ev_charging());
        assert!(spot.is_available());
    }

    #[test]
    fn test_json_uses_upper_case_enums() {
        let spot = ParkingSpot::new("A1", 1, 1, VehicleSize::Compact, Vec::<String>::new());
        let value = serde_json::to_value(&spot).unwrap();

        assert_eq!(value["status"], "AVAILABLE");
        assert_eq!(value["size"], "COMPACT");
        assert_eq!(value["features"], serde_json::json!([]));
    }
}
