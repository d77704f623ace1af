//! Application state for the web layer.

use std::sync::Arc;

use crate::timetable::Timetable;
use crate::weather::WeatherFeed;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The static shuttle timetable.
    pub timetable: Arc<Timetable>,

    /// Current weather reading.
    pub weather: WeatherFeed,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable, weather: WeatherFeed) -> Self {
        Self {
            timetable: Arc::new(timetable),
            weather,
        }
    }
}
