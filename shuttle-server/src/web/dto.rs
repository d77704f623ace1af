//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::delay::DelayEstimate;
use crate::domain::BusSchedule;
use crate::weather::WeatherReading;

/// A schedule in listing results.
#[derive(Debug, Serialize)]
pub struct ScheduleResult {
    /// Bus identifier, e.g. "VVCE-01"
    pub bus_number: String,

    /// Route label
    pub route: String,

    /// Scheduled departure time, "HH:MM"
    pub departure_time: String,

    /// Scheduled arrival time, "HH:MM"
    pub arrival_time: String,

    /// Ordered stop names
    pub stops: Vec<String>,

    /// Human-readable frequency
    pub frequency: String,
}

impl From<&BusSchedule> for ScheduleResult {
    fn from(schedule: &BusSchedule) -> Self {
        Self {
            bus_number: schedule.bus_number.to_string(),
            route: schedule.route.clone(),
            departure_time: schedule.departure.to_string(),
            arrival_time: schedule.arrival.to_string(),
            stops: schedule.stops.clone(),
            frequency: schedule.frequency.clone(),
        }
    }
}

/// Response for the schedule listing.
#[derive(Debug, Serialize)]
pub struct SchedulesResponse {
    /// All schedules, in timetable order
    pub schedules: Vec<ScheduleResult>,
}

/// Response for a single bus's expected arrival.
#[derive(Debug, Serialize)]
pub struct EtaResponse {
    /// Bus identifier
    pub bus_number: String,

    /// Route label
    pub route: String,

    /// Scheduled arrival time, "HH:MM"
    pub scheduled_arrival: String,

    /// Expected delay in minutes
    pub delay_minutes: u32,

    /// Rider-facing explanation of the delay
    pub reason: String,

    /// Delay-adjusted arrival time, "HH:MM"
    pub expected_arrival: String,
}

/// Response for the current weather and its implied delay.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    /// Classified condition, e.g. "rain"
    pub condition: String,

    /// Temperature in degrees Celsius
    pub temp_celsius: f64,

    /// Expected delay in minutes under this reading
    pub delay_minutes: u32,

    /// Rider-facing explanation
    pub reason: String,
}

impl WeatherResponse {
    /// Assemble from a reading and the estimate it implies.
    pub fn from_parts(reading: &WeatherReading, estimate: DelayEstimate) -> Self {
        Self {
            condition: reading.condition.to_string(),
            temp_celsius: reading.temp_celsius,
            delay_minutes: estimate.minutes,
            reason: estimate.reason().to_string(),
        }
    }
}

/// Request to replace the current weather reading.
#[derive(Debug, Deserialize)]
pub struct UpdateWeatherRequest {
    /// Raw condition text, normalized server-side
    pub condition: String,

    /// Temperature in degrees Celsius
    pub temp_celsius: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
