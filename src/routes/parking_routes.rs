use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use crate::controllers::parking_controller::ParkingController;
use crate::dto::parking_dto::{
    CheckInRequest, CheckOutRequest, CheckOutResponse, CreateSpotRequest, HealthResponse,
    UpdateSpotStatusRequest,
};
use crate::models::car::Car;
use crate::models::parking_spot::ParkingSpot;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parking_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/spots", get(list_spots).post(create_spot))
        .route("/api/v1/spots/available", get(list_available_spots))
        .route("/api/v1/spots/:id/status", put(update_spot_status))
        .route("/api/v1/cars/check-in", post(check_in))
        .route("/api/v1/cars/check-out", post(check_out))
        .route("/api/v1/cars/:license_plate", get(find_car))
}

fn controller(state: &AppState) -> ParkingController {
    ParkingController::new(state.parking_service.clone())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(controller(&state).health())
}

async fn list_spots(State(state): State<AppState>) -> Json<Vec<ParkingSpot>> {
    Json(controller(&state).list_spots())
}

async fn list_available_spots(State(state): State<AppState>) -> Json<Vec<ParkingSpot>> {
    Json(controller(&state).list_available_spots())
}

async fn create_spot(
    State(state): State<AppState>,
    payload: Result<Json<CreateSpotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ParkingSpot>), AppError> {
    let Json(request) = payload?;
    let spot = controller(&state).create_spot(request)?;
    Ok((StatusCode::CREATED, Json(spot)))
}

async fn update_spot_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSpotStatusRequest>, JsonRejection>,
) -> Result<Json<ParkingSpot>, AppError> {
    let Json(request) = payload?;
    let spot = controller(&state).update_spot_status(&id, request)?;
    Ok(Json(spot))
}

async fn check_in(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let Json(request) = payload?;
    let car = controller(&state).check_in(request)?;
    Ok((StatusCode::CREATED, Json(car)))
}

async fn check_out(
    State(state): State<AppState>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Result<Json<CheckOutResponse>, AppError> {
    let Json(request) = payload?;
    let response = controller(&state).check_out(request)?;
    Ok(Json(response))
}

async fn find_car(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
) -> Result<Json<Car>, AppError> {
    let car = controller(&state).find_car(&license_plate)?;
    Ok(Json(car))
}
