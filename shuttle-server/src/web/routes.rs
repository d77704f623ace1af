//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;

use crate::delay::{adjusted_arrival, estimate_delay};
use crate::domain::BusNumber;
use crate::weather::{Condition, WeatherReading};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedules", get(list_schedules))
        .route("/schedules/:bus/eta", get(bus_eta))
        .route("/weather", get(current_weather).put(update_weather))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all schedules in the timetable.
async fn list_schedules(State(state): State<AppState>) -> Json<SchedulesResponse> {
    let schedules = state.timetable.iter().map(ScheduleResult::from).collect();
    Json(SchedulesResponse { schedules })
}

/// Expected arrival for one bus under the current weather.
async fn bus_eta(
    State(state): State<AppState>,
    Path(bus): Path<String>,
) -> Result<Json<EtaResponse>, AppError> {
    let bus_number = BusNumber::parse(&bus).map_err(|e| AppError::BadRequest {
        message: format!("invalid bus number {bus:?}: {e}"),
    })?;

    let schedule = state
        .timetable
        .get(&bus_number)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no schedule for bus {bus_number}"),
        })?;

    let reading = state.weather.current().await;
    let today = Local::now().date_naive();
    let estimate = estimate_delay(&reading, today);
    let expected = adjusted_arrival(schedule, estimate.minutes);

    Ok(Json(EtaResponse {
        bus_number: schedule.bus_number.to_string(),
        route: schedule.route.clone(),
        scheduled_arrival: schedule.arrival.to_string(),
        delay_minutes: estimate.minutes,
        reason: estimate.reason().to_string(),
        expected_arrival: expected.to_string(),
    }))
}

/// Current weather reading and the delay it implies.
async fn current_weather(State(state): State<AppState>) -> Json<WeatherResponse> {
    let reading = state.weather.current().await;
    let today = Local::now().date_naive();
    let estimate = estimate_delay(&reading, today);
    Json(WeatherResponse::from_parts(&reading, estimate))
}

/// Replace the current weather reading.
///
/// Raw condition text is normalized through [`Condition::classify`].
async fn update_weather(
    State(state): State<AppState>,
    Json(req): Json<UpdateWeatherRequest>,
) -> StatusCode {
    let reading = WeatherReading::new(Condition::classify(&req.condition), req.temp_celsius);
    state.weather.update(reading).await;
    StatusCode::NO_CONTENT
}

/// Application-level errors for HTTP responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
