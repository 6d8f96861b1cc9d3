use crate::models::car::Car;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Almacén en memoria de los vehículos aparcados, indexado por matrícula
#[derive(Debug, Default)]
pub struct CarRepository {
    cars: RwLock<HashMap<String, Car>>,
}

impl CarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, car: Car) -> Car {
        log::debug!("💾 Registrando vehículo {} en plaza {}", car.license_plate, car.assigned_spot_id);
        self.cars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(car.license_plate.clone(), car.clone());
        car
    }

    pub fn find_by_license_plate(&self, license_plate: &str) -> Option<Car> {
        self.cars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(license_plate)
            .cloned()
    }

    /// Borrar el registro; no hace nada si la matrícula no existe
    pub fn delete_by_license_plate(&self, license_plate: &str) {
        self.cars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(license_plate);
    }

    pub fn count(&self) -> usize {
        self.cars.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parking_spot::VehicleSize;
    use chrono::Utc;

    #[test]
    fn test_save_find_and_delete() {
        let repo = CarRepository::new();
        let car = Car::new("AB-123-CD", "A1", Utc::now(), VehicleSize::Compact);

        repo.save(car.clone());
        assert_eq!(repo.find_by_license_plate("AB-123-CD"), Some(car));
        assert_eq!(repo.count(), 1);

        repo.delete_by_license_plate("AB-123-CD");
        assert!(repo.find_by_license_plate("AB-123-CD").is_none());
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_delete_unknown_plate_is_noop() {
        let repo = CarRepository::new();
        repo.save(Car::new("KEEP-1", "B2", Utc::now(), VehicleSize::Standard));

        repo.delete_by_license_plate("UNKNOWN");
        assert_eq!(repo.count(), 1);
    }
}
