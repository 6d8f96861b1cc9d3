pub mod parking_routes;
