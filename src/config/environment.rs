//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y las tarifas del garaje.

use anyhow::{anyhow, bail, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Tarifa por hora estándar
pub const DEFAULT_HOURLY_RATE: f64 = 5.00;
/// Tarifa por hora de las plazas con cargador
pub const DEFAULT_PREMIUM_RATE: f64 = 7.50;

/// Tarifas por hora, en unidades de moneda sin especificar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingRates {
    pub hourly_rate: f64,
    pub premium_rate: f64,
}

impl Default for ParkingRates {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            premium_rate: DEFAULT_PREMIUM_RATE,
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub rates: ParkingRates,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            rates: ParkingRates::default(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let rates = ParkingRates {
            hourly_rate: parse_var("PARKING_RATE_HOURLY", defaults.rates.hourly_rate)?,
            premium_rate: parse_var("PARKING_RATE_PREMIUM_EV", defaults.rates.premium_rate)?,
        };
        if !(rates.hourly_rate > 0.0 && rates.premium_rate > 0.0) {
            bail!("Parking rates must be positive, got {:?}", rates);
        }

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins,
            rates,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} must be a valid number ({}): {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}
