//! Modelos del sistema
//!
//! Este módulo contiene los valores inmutables que maneja el garaje:
//! plazas de aparcamiento y vehículos registrados.

pub mod car;
pub mod parking_spot;

pub use car::*;
pub use parking_spot::*;
