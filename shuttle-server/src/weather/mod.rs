//! Weather readings for delay estimation.
//!
//! The portal has no real weather API. Readings come from a shared
//! [`WeatherFeed`] that serves a configured value; a live feed would plug in
//! at the same seam. Free-text condition reports are normalized into the
//! [`Condition`] enum at the boundary so the delay rules never do string
//! matching themselves.

mod feed;

pub use feed::WeatherFeed;

use std::fmt;

/// A classified weather condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Clear or otherwise unremarkable weather.
    Clear,
    /// Any rain-like condition ("rain", "light raining", "Rainy").
    Rain,
    /// Fog or mist reported as fog.
    Fog,
    /// Unrecognized report, kept verbatim. Never matches a delay rule.
    Other(String),
}

impl Condition {
    /// Classify a raw condition report.
    ///
    /// Matching is case-insensitive on substrings, with `rain` taking
    /// precedence over `fog` when both appear (mirroring the order the delay
    /// rules are evaluated in). Anything unrecognized, including the empty
    /// string, becomes [`Condition::Other`] and implies no delay by itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::weather::Condition;
    ///
    /// assert_eq!(Condition::classify("Light Rain"), Condition::Rain);
    /// assert_eq!(Condition::classify("FOGGY"), Condition::Fog);
    /// assert_eq!(Condition::classify("clear"), Condition::Clear);
    /// assert_eq!(Condition::classify("dust storm"), Condition::Other("dust storm".into()));
    /// ```
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();

        if lower.contains("rain") {
            Condition::Rain
        } else if lower.contains("fog") {
            Condition::Fog
        } else if lower.contains("clear") || lower.contains("sunny") {
            Condition::Clear
        } else {
            Condition::Other(trimmed.to_string())
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Clear => f.write_str("clear"),
            Condition::Rain => f.write_str("rain"),
            Condition::Fog => f.write_str("fog"),
            Condition::Other(s) => f.write_str(s),
        }
    }
}

/// An ephemeral weather reading.
///
/// Produced per evaluation and never cached; delay estimation recomputes
/// from the current reading every time.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Classified condition.
    pub condition: Condition,

    /// Temperature in degrees Celsius.
    pub temp_celsius: f64,
}

impl WeatherReading {
    /// Create a new reading.
    pub fn new(condition: Condition, temp_celsius: f64) -> Self {
        Self {
            condition,
            temp_celsius,
        }
    }
}

impl Default for WeatherReading {
    /// A mild clear day, the feed's starting point.
    fn default() -> Self {
        Self::new(Condition::Clear, 28.0)
    }
}
