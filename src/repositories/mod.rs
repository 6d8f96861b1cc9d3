pub mod car_repository;
pub mod parking_spot_repository;
