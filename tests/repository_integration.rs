//! Integration tests de la capa de repositorio
//!
//! Estos tests verifican las operaciones CRUD del repositorio contra
//! una base SQLite en memoria, sin pasar por la capa HTTP.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use vehicle_registry::database::connection;
use vehicle_registry::models::vehicle::Vehicle;
use vehicle_registry::repositories::vehicle_repository::VehicleRepository;
use vehicle_registry::utils::errors::AppError;

async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    connection::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

fn sample_vehicle(vin: &str) -> Vehicle {
    Vehicle {
        vin: vin.to_string(),
        manufacturer: "Honda".to_string(),
        description: Some("test vehicle".to_string()),
        horse_power: 150,
        model_name: "Civic".to_string(),
        model_year: 2020,
        purchase_price: 20000.0,
        fuel_type: "Gasoline".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_by_vin() {
    let repository = VehicleRepository::new(setup_test_db().await);
    let vehicle = sample_vehicle("1HGBH41JXMN109186");

    let created = repository.create(&vehicle).await.unwrap();
    assert_eq!(created, vehicle);

    let found = repository
        .find_by_vin("1HGBH41JXMN109186")
        .await
        .unwrap()
        .expect("vehicle should exist");
    assert_eq!(found, vehicle);
}

#[tokio::test]
async fn test_find_by_vin_missing_returns_none() {
    let repository = VehicleRepository::new(setup_test_db().await);

    let found = repository.find_by_vin("INVALIDVIN").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_all_ordered_by_vin() {
    let repository = VehicleRepository::new(setup_test_db().await);
    repository
        .create(&sample_vehicle("1HGCM82633A123456"))
        .await
        .unwrap();
    repository
        .create(&sample_vehicle("1HGBH41JXMN109186"))
        .await
        .unwrap();

    let vehicles = repository.find_all().await.unwrap();
    assert_eq!(vehicles.len(), 2);
    assert_eq!(vehicles[0].vin, "1HGBH41JXMN109186");
    assert_eq!(vehicles[1].vin, "1HGCM82633A123456");
}

#[tokio::test]
async fn test_update_overwrites_row() {
    let repository = VehicleRepository::new(setup_test_db().await);
    repository
        .create(&sample_vehicle("1HGBH41JXMN109186"))
        .await
        .unwrap();

    let mut updated = sample_vehicle("1HGBH41JXMN109186");
    updated.horse_power = 180;
    updated.description = None;

    let result = repository
        .update("1HGBH41JXMN109186", &updated)
        .await
        .unwrap();
    assert_eq!(result.horse_power, 180);
    assert_eq!(result.description, None);
}

#[tokio::test]
async fn test_update_can_change_vin() {
    let repository = VehicleRepository::new(setup_test_db().await);
    repository
        .create(&sample_vehicle("1HGBH41JXMN109186"))
        .await
        .unwrap();

    let renamed = sample_vehicle("1HGCM82633A123456");
    let result = repository
        .update("1HGBH41JXMN109186", &renamed)
        .await
        .unwrap();
    assert_eq!(result.vin, "1HGCM82633A123456");

    assert!(repository
        .find_by_vin("1HGBH41JXMN109186")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_returns_rows_affected() {
    let repository = VehicleRepository::new(setup_test_db().await);
    repository
        .create(&sample_vehicle("1HGBH41JXMN109186"))
        .await
        .unwrap();

    assert_eq!(repository.delete("1HGBH41JXMN109186").await.unwrap(), 1);
    assert_eq!(repository.delete("1HGBH41JXMN109186").await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_vin_is_database_error() {
    let repository = VehicleRepository::new(setup_test_db().await);
    let vehicle = sample_vehicle("1HGBH41JXMN109186");

    repository.create(&vehicle).await.unwrap();
    let error = repository.create(&vehicle).await.unwrap_err();

    assert!(matches!(error, AppError::Database(_)));
    assert!(error.to_string().contains("UNIQUE constraint failed"));
}
