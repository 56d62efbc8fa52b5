use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vin, manufacturer, description, horse_power, model_name, model_year, purchase_price, fuel_type)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&vehicle.vin)
        .bind(&vehicle.manufacturer)
        .bind(&vehicle.description)
        .bind(vehicle.horse_power)
        .bind(&vehicle.model_name)
        .bind(vehicle.model_year)
        .bind(vehicle.purchase_price)
        .bind(&vehicle.fuel_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_by_vin(&self, vin: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE vin = ?")
            .bind(vin)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY vin")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    /// Sobrescribe todas las columnas de la fila identificada por `current_vin`.
    /// El VIN nuevo puede diferir del actual; una colisión sale como error
    /// de la base de datos.
    pub async fn update(&self, current_vin: &str, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET vin = ?, manufacturer = ?, description = ?, horse_power = ?, model_name = ?, model_year = ?, purchase_price = ?, fuel_type = ?
            WHERE vin = ?
            RETURNING *
            "#,
        )
        .bind(&vehicle.vin)
        .bind(&vehicle.manufacturer)
        .bind(&vehicle.description)
        .bind(vehicle.horse_power)
        .bind(&vehicle.model_name)
        .bind(vehicle.model_year)
        .bind(vehicle.purchase_price)
        .bind(&vehicle.fuel_type)
        .bind(current_vin)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Devuelve el número de filas borradas (0 si el VIN no existe)
    pub async fn delete(&self, vin: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE vin = ?")
            .bind(vin)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
