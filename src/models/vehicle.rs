//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle para CRUD operations.
//! Mapea exactamente a la tabla vehicles con primary key 'vin'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - una fila de la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vin: String,
    pub manufacturer: String,
    pub description: Option<String>,
    pub horse_power: i64,
    pub model_name: String,
    pub model_year: i64,
    pub purchase_price: f64,
    pub fuel_type: String,
}

/// Columnas actualizables via PUT. Las claves desconocidas del payload
/// se ignoran; 'vin' sigue siendo asignable como en el resto de columnas.
pub const COLUMNS: [&str; 8] = [
    "vin",
    "manufacturer",
    "description",
    "horse_power",
    "model_name",
    "model_year",
    "purchase_price",
    "fuel_type",
];
