use crate::models::parking_spot::ParkingSpot;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Almacén en memoria de plazas, indexado por id.
///
/// El listado sale ordenado por id, así que el orden es estable mientras
/// viva el proceso. Cada escritura sustituye el valor completo, por lo que
/// un lock envenenado nunca deja una plaza a medio escribir y se recupera.
#[derive(Debug, Default)]
pub struct ParkingSpotRepository {
    spots: RwLock<BTreeMap<String, ParkingSpot>>,
}

impl ParkingSpotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear el almacén con una distribución inicial de plazas
    pub fn with_spots(spots: impl IntoIterator<Item = ParkingSpot>) -> Self {
        let spots = spots
            .into_iter()
            .map(|spot| (spot.id.clone(), spot))
            .collect();

        Self {
            spots: RwLock::new(spots),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, ParkingSpot>> {
        self.spots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, ParkingSpot>> {
        self.spots.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn find_all(&self) -> Vec<ParkingSpot> {
        self.read().values().cloned().collect()
    }

    pub fn find_all_available(&self) -> Vec<ParkingSpot> {
        self.read()
            .values()
            .filter(|spot| spot.is_available())
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<ParkingSpot> {
        self.read().get(id).cloned()
    }

    pub fn exists_by_id(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Insertar o reemplazar la plaza completa
    pub fn save(&self, spot: ParkingSpot) -> ParkingSpot {
        log::debug!("💾 Guardando plaza {} ({:?})", spot.id, spot.status);
        self.write().insert(spot.id.clone(), spot.clone());
        spot
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parking_spot::{ParkingStatus, VehicleSize};

    fn repository() -> ParkingSpotRepository {
        ParkingSpotRepository::with_spots([
            ParkingSpot::new("B1", 2, 1, VehicleSize::Standard, Vec::<String>::new()),
            ParkingSpot::new("A1", 1, 1, VehicleSize::Compact, Vec::<String>::new()),
            ParkingSpot::new("C1", 3, 1, VehicleSize::Oversized, ["EV_CHARGING"]),
        ])
    }

    #[test]
    fn test_find_all_is_sorted_by_id() {
        let ids: Vec<String> = repository().find_all().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["A1", "B1", "C1"]);
    }

    #[test]
    fn test_find_all_available_skips_occupied() {
        let repo = repository();
        let b1 = repo.find_by_id("B1").unwrap();
        repo.save(b1.with_status(ParkingStatus::Occupied));

        let ids: Vec<String> = repo.find_all_available().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["A1", "C1"]);
        assert_eq!(repo.find_all().len(), 3);
    }

    #[test]
    fn test_save_replaces_whole_record() {
        let repo = repository();
        let replacement = ParkingSpot::new("A1", 4, 9, VehicleSize::Oversized, ["COVERED"]);
        repo.save(replacement.clone());

        assert_eq!(repo.find_by_id("A1"), Some(replacement));
        assert_eq!(repo.count(), 3);
    }

    #[test]
    fn test_missing_spot_is_none() {
        let repo = repository();
        assert!(repo.find_by_id("Z9").is_none());
        assert!(!repo.exists_by_id("Z9"));
        assert!(repo.exists_by_id("C1"));
    }
}
