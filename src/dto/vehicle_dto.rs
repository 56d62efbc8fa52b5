use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::utils::validation::VIN_ALPHANUMERIC;

// Request para crear un vehículo. Los campos desconocidos se rechazan
// en la deserialización; los errores de VIN llevan el mensaje exacto
// que se devuelve al caller.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateVehicleRequest {
    #[validate(
        length(equal = 17, message = "Invalid VIN length"),
        regex(
            path = "VIN_ALPHANUMERIC",
            message = "VIN must contain only alphanumeric characters"
        )
    )]
    pub vin: String,

    pub manufacturer: String,

    pub description: Option<String>,

    pub horse_power: i64,

    pub model_name: String,

    pub model_year: i64,

    pub purchase_price: f64,

    pub fuel_type: String,
}

// Response de vehículo - las ocho columnas de la tabla
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vin: String,
    pub manufacturer: String,
    pub description: Option<String>,
    pub horse_power: i64,
    pub model_name: String,
    pub model_year: i64,
    pub purchase_price: f64,
    pub fuel_type: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vin: vehicle.vin,
            manufacturer: vehicle.manufacturer,
            description: vehicle.description,
            horse_power: vehicle.horse_power,
            model_name: vehicle.model_name,
            model_year: vehicle.model_year,
            purchase_price: vehicle.purchase_price,
            fuel_type: vehicle.fuel_type,
        }
    }
}
