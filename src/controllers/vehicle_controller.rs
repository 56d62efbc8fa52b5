use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::models::vehicle::{Vehicle, COLUMNS};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation;
use serde_json::Value;
use sqlx::SqlitePool;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    /// Crear un vehículo. El orden de los checks es parte del contrato:
    /// campos requeridos (422), formato de VIN (400), tipos numéricos (400),
    /// deserialización tipada (400) y por último la inserción (400 con el
    /// error crudo de la base de datos, duplicados incluidos).
    pub async fn create(&self, payload: Option<Value>) -> Result<VehicleResponse, AppError> {
        let data = match payload {
            Some(data) if !data.is_null() => data,
            _ => return Err(AppError::BadRequest("Invalid or missing JSON".to_string())),
        };

        if let Some(field) = validation::missing_required_field(&data) {
            return Err(AppError::UnprocessableEntity(format!(
                "Missing field: {}",
                field
            )));
        }

        let vin = data.get("vin").and_then(Value::as_str).unwrap_or_default();
        if let Err(error) = validation::validate_vin(vin) {
            return Err(AppError::BadRequest(vin_error_message(&error)));
        }

        if let Some(fields) = data.as_object() {
            if let Some(field) = validation::invalid_numeric_field(fields) {
                return Err(AppError::BadRequest(format!(
                    "Field '{}' must be a number",
                    field
                )));
            }
        }

        let request: CreateVehicleRequest =
            serde_json::from_value(data).map_err(|e| AppError::BadRequest(e.to_string()))?;
        request.validate()?;

        let vehicle = Vehicle {
            vin: request.vin,
            manufacturer: request.manufacturer,
            description: request.description,
            horse_power: request.horse_power,
            model_name: request.model_name,
            model_year: request.model_year,
            purchase_price: request.purchase_price,
            fuel_type: request.fuel_type,
        };

        let created = self.repository.create(&vehicle).await?;
        Ok(VehicleResponse::from(created))
    }

    pub async fn get_by_vin(&self, vin: &str) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_vin(vin)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Actualización parcial. Solo se aplican las columnas del modelo
    /// presentes en el payload; las claves desconocidas se ignoran y los
    /// campos numéricos se re-validan antes de tocar nada.
    pub async fn update(&self, vin: &str, payload: Option<Value>) -> Result<VehicleResponse, AppError> {
        let mut vehicle = self
            .repository
            .find_by_vin(vin)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let data = match payload {
            Some(data) => data,
            None => return Err(AppError::BadRequest("Invalid or missing JSON".to_string())),
        };

        // Payload null o vacío: no-op, se devuelve el registro sin cambios
        if data.is_null() {
            return Ok(VehicleResponse::from(vehicle));
        }

        let fields = match data.as_object() {
            Some(fields) => fields,
            None => return Err(AppError::BadRequest("Invalid or missing JSON".to_string())),
        };
        if fields.is_empty() {
            return Ok(VehicleResponse::from(vehicle));
        }

        if let Some(field) = validation::invalid_numeric_field(fields) {
            return Err(AppError::BadRequest(format!(
                "Field '{}' must be a number",
                field
            )));
        }

        for column in COLUMNS {
            if let Some(value) = fields.get(column) {
                apply_column(&mut vehicle, column, value)?;
            }
        }

        let updated = self.repository.update(vin, &vehicle).await?;
        Ok(VehicleResponse::from(updated))
    }

    pub async fn delete(&self, vin: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(vin).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}

/// Asignar un valor JSON a la columna correspondiente del modelo
fn apply_column(vehicle: &mut Vehicle, column: &str, value: &Value) -> Result<(), AppError> {
    match column {
        "vin" => vehicle.vin = require_string(column, value)?,
        "manufacturer" => vehicle.manufacturer = require_string(column, value)?,
        "description" => {
            vehicle.description = if value.is_null() {
                None
            } else {
                Some(require_string(column, value)?)
            };
        }
        "horse_power" => vehicle.horse_power = as_integer(value),
        "model_name" => vehicle.model_name = require_string(column, value)?,
        "model_year" => vehicle.model_year = as_integer(value),
        "purchase_price" => vehicle.purchase_price = value.as_f64().unwrap_or_default(),
        "fuel_type" => vehicle.fuel_type = require_string(column, value)?,
        _ => {}
    }

    Ok(())
}

fn require_string(column: &str, value: &Value) -> Result<String, AppError> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| AppError::BadRequest(format!("Field '{}' must be a string", column)))
}

/// Cast de número JSON a entero; los no-integrales se truncan hacia cero
fn as_integer(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or_default()
}

fn vin_error_message(error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Invalid VIN".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            vin: "1HGBH41JXMN109186".to_string(),
            manufacturer: "Honda".to_string(),
            description: None,
            horse_power: 150,
            model_name: "Civic".to_string(),
            model_year: 2020,
            purchase_price: 20000.0,
            fuel_type: "Gasoline".to_string(),
        }
    }

    #[test]
    fn test_apply_column_overwrites_fields() {
        let mut vehicle = sample_vehicle();
        apply_column(&mut vehicle, "horse_power", &json!(180)).unwrap();
        apply_column(&mut vehicle, "fuel_type", &json!("Electric")).unwrap();
        assert_eq!(vehicle.horse_power, 180);
        assert_eq!(vehicle.fuel_type, "Electric");
        assert_eq!(vehicle.manufacturer, "Honda");
    }

    #[test]
    fn test_apply_column_description_nullable() {
        let mut vehicle = sample_vehicle();
        apply_column(&mut vehicle, "description", &json!("daily driver")).unwrap();
        assert_eq!(vehicle.description.as_deref(), Some("daily driver"));

        apply_column(&mut vehicle, "description", &Value::Null).unwrap();
        assert_eq!(vehicle.description, None);
    }

    #[test]
    fn test_apply_column_rejects_non_string() {
        let mut vehicle = sample_vehicle();
        let error = apply_column(&mut vehicle, "manufacturer", &json!(42)).unwrap_err();
        assert!(matches!(error, AppError::BadRequest(_)));
    }

    #[test]
    fn test_as_integer_truncates_floats() {
        assert_eq!(as_integer(&json!(150)), 150);
        assert_eq!(as_integer(&json!(150.9)), 150);
    }
}
