//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de payloads
//! antes de tocar la base de datos.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use validator::ValidationError;

lazy_static! {
    /// Charset permitido para un VIN
    pub static ref VIN_ALPHANUMERIC: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

/// Campos obligatorios de un payload de creación
pub const REQUIRED_FIELDS: [&str; 7] = [
    "vin",
    "manufacturer",
    "horse_power",
    "model_name",
    "model_year",
    "purchase_price",
    "fuel_type",
];

/// Campos que deben llegar como número JSON
pub const NUMERIC_FIELDS: [&str; 3] = ["horse_power", "model_year", "purchase_price"];

/// Validar longitud y formato del VIN
pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() != 17 {
        let mut error = ValidationError::new("vin_length");
        error.message = Some("Invalid VIN length".into());
        return Err(error);
    }
    if !VIN_ALPHANUMERIC.is_match(value) {
        let mut error = ValidationError::new("vin_charset");
        error.message = Some("VIN must contain only alphanumeric characters".into());
        return Err(error);
    }
    Ok(())
}

/// Primer campo requerido ausente o null en el payload
pub fn missing_required_field(data: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .find(|field| data.get(field).map_or(true, Value::is_null))
}

/// Primer campo numérico presente en el payload con un valor no numérico
pub fn invalid_numeric_field(data: &Map<String, Value>) -> Option<&'static str> {
    NUMERIC_FIELDS
        .iter()
        .copied()
        .find(|field| data.get(*field).map_or(false, |value| !value.is_number()))
}
