//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno, las tarifas
//! y la distribución inicial de plazas del garaje.

pub mod environment;
pub mod garage_layout;

pub use environment::*;
