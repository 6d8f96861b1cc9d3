//! Distribución inicial del garaje
//!
//! Datos fijos: no se persisten y se vuelven a sembrar en cada arranque.

use crate::models::parking_spot::{ParkingSpot, VehicleSize, EV_CHARGING};

const COMPACT_SPOTS: u32 = 5;
const STANDARD_SPOTS: u32 = 3;
const OVERSIZED_SPOTS: u32 = 2;

/// Plazas por defecto:
/// - Nivel 1: compactas `A1..A5`
/// - Nivel 2: estándar `B1..B3`
/// - Nivel 3: grandes `C1..C2`, con cargador en `C1`
pub fn default_layout() -> Vec<ParkingSpot> {
    let compact = (1..=COMPACT_SPOTS)
        .map(|i| ParkingSpot::new(format!("A{}", i), 1, i, VehicleSize::Compact, Vec::<String>::new()));

    let standard = (1..=STANDARD_SPOTS)
        .map(|i| ParkingSpot::new(format!("B{}", i), 2, i, VehicleSize::Standard, Vec::<String>::new()));

    let oversized = (1..=OVERSIZED_SPOTS).map(|i| {
        let features = if i == 1 { vec![EV_CHARGING] } else { vec![] };
        ParkingSpot::new(format!("C{}", i), 3, i, VehicleSize::Oversized, features)
    });

    compact.chain(standard).chain(oversized).collect()
}
