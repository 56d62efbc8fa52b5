use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::Value;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:vin", get(get_vehicle))
        .route("/:vin", put(update_vehicle))
        .route("/:vin", delete(delete_vehicle))
}

// El body llega como Option<Json<Value>>: un JSON malformado o ausente
// se responde con 400 en vez del rechazo por defecto de Axum.
async fn create_vehicle(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> AppResult<(StatusCode, Json<VehicleResponse>)> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(payload.map(|Json(data)| data)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehicles(State(state): State<AppState>) -> AppResult<Json<Vec<VehicleResponse>>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> AppResult<Json<VehicleResponse>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_vin(&vin).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
    payload: Option<Json<Value>>,
) -> AppResult<Json<VehicleResponse>> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller
        .update(&vin, payload.map(|Json(data)| data))
        .await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> AppResult<StatusCode> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(&vin).await?;
    Ok(StatusCode::NO_CONTENT)
}
