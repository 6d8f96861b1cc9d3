//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar la entrada
//! que llega al servicio de aparcamiento.

use validator::ValidationError;

use super::errors::{invalid_input_error, AppResult};

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Exigir una matrícula presente y no vacía.
///
/// Devuelve la matrícula tal cual llegó; solo se recorta para comprobarla.
pub fn require_license_plate(license_plate: Option<&str>) -> AppResult<&str> {
    match license_plate {
        Some(plate) if validate_not_blank(plate).is_ok() => Ok(plate),
        _ => Err(invalid_input_error("License plate cannot be null or empty")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("AB-123").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }

    #[test]
    fn test_require_license_plate() {
        assert_eq!(require_license_plate(Some(" AB-123 ")).unwrap(), " AB-123 ");
        assert!(require_license_plate(Some("  ")).is_err());
        assert!(require_license_plate(None).is_err());
    }
}
