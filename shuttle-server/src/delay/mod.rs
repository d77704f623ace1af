//! Weather-based delay estimation.
//!
//! The campus has no live traffic data, so expected delays are derived from
//! a small set of weather rules plus a seasonal heuristic: June through
//! October is treated as rainy season regardless of the reported condition.
//! The evaluation date is an explicit parameter rather than an ambient clock
//! read, so the rules are deterministic under test; callers pass
//! `Local::now().date_naive()`.
//!
//! Rule precedence, first match wins:
//! 1. rainy-season month or rain reported: 5 minutes
//! 2. fog reported: 3 minutes
//! 3. temperature strictly above 35 C: 2 minutes
//! 4. otherwise: no delay

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::domain::{BusSchedule, ScheduleTime};
use crate::weather::{Condition, WeatherReading};

/// Temperature above which heat traffic delays apply (strict comparison).
pub const HEAT_THRESHOLD_CELSIUS: f64 = 35.0;

/// First month of the rainy season (June).
const RAINY_SEASON_FIRST_MONTH: u32 = 6;

/// Last month of the rainy season (October), inclusive.
const RAINY_SEASON_LAST_MONTH: u32 = 10;

/// Why a delay was (or was not) applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayCause {
    /// Rainy season or rain reported.
    HeavyRain,
    /// Fog reported.
    Fog,
    /// Temperature above the heat threshold.
    HeatTraffic,
    /// Nothing applies; buses run to schedule.
    Clear,
}

impl DelayCause {
    /// The rider-facing explanation for this cause.
    pub fn reason(&self) -> &'static str {
        match self {
            DelayCause::HeavyRain => {
                "Heavy rain expected - buses may be delayed by 5-10 minutes"
            }
            DelayCause::Fog => "Foggy conditions - buses may be delayed by 3-5 minutes",
            DelayCause::HeatTraffic => "High traffic due to heat - minor delays possible",
            DelayCause::Clear => "Normal weather conditions - buses running on time",
        }
    }
}

impl std::fmt::Display for DelayCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// A computed delay estimate.
///
/// Transient: recomputed on every evaluation, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayEstimate {
    /// Expected delay in minutes. Zero when conditions are normal.
    pub minutes: u32,

    /// Which rule produced this estimate.
    pub cause: DelayCause,
}

impl DelayEstimate {
    /// The rider-facing explanation string.
    pub fn reason(&self) -> &'static str {
        self.cause.reason()
    }
}

/// Whether the given date falls in the rainy season (June-October inclusive).
pub fn is_rainy_season(date: NaiveDate) -> bool {
    (RAINY_SEASON_FIRST_MONTH..=RAINY_SEASON_LAST_MONTH).contains(&date.month())
}

/// Estimate the delay for a weather reading on a given date.
///
/// No error paths: an unrecognized condition simply falls through to the
/// temperature rule and then to no delay.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shuttle_server::delay::estimate_delay;
/// use shuttle_server::weather::{Condition, WeatherReading};
///
/// let january = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let july = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
/// let reading = WeatherReading::new(Condition::Clear, 20.0);
///
/// assert_eq!(estimate_delay(&reading, january).minutes, 0);
/// assert_eq!(estimate_delay(&reading, july).minutes, 5); // rainy season
/// ```
pub fn estimate_delay(weather: &WeatherReading, date: NaiveDate) -> DelayEstimate {
    if is_rainy_season(date) || weather.condition == Condition::Rain {
        debug!(month = date.month(), condition = %weather.condition, "rain rule matched");
        return DelayEstimate {
            minutes: 5,
            cause: DelayCause::HeavyRain,
        };
    }

    if weather.condition == Condition::Fog {
        return DelayEstimate {
            minutes: 3,
            cause: DelayCause::Fog,
        };
    }

    if weather.temp_celsius > HEAT_THRESHOLD_CELSIUS {
        return DelayEstimate {
            minutes: 2,
            cause: DelayCause::HeatTraffic,
        };
    }

    DelayEstimate {
        minutes: 0,
        cause: DelayCause::Clear,
    }
}

/// Scheduled arrival plus a delay, wrapping modulo 24 hours.
///
/// Only the time of day is returned; a delay that crosses midnight rolls the
/// clock over without tracking the date. Malformed times cannot reach this
/// function, they are rejected when the schedule is parsed.
pub fn adjusted_arrival(schedule: &BusSchedule, delay_minutes: u32) -> ScheduleTime {
    schedule.arrival.plus_minutes(delay_minutes)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::BusNumber;
    use proptest::prelude::*;

    prop_compose! {
        fn any_date()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28
        ) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        }
    }

    prop_compose! {
        fn any_reading()(
            condition in prop_oneof![
                Just(Condition::Clear),
                Just(Condition::Rain),
                Just(Condition::Fog),
                "[a-z ]{0,12}".prop_map(Condition::Other),
            ],
            temp in -20.0f64..55.0
        ) -> WeatherReading {
            WeatherReading::new(condition, temp)
        }
    }

    proptest! {
        /// Delay is always one of the four rule outputs
        #[test]
        fn delay_is_bounded(reading in any_reading(), date in any_date()) {
            let estimate = estimate_delay(&reading, date);
            prop_assert!(matches!(estimate.minutes, 0 | 2 | 3 | 5));
        }

        /// Every rainy-season date yields the 5-minute rain delay
        #[test]
        fn rainy_season_always_five(
            reading in any_reading(),
            year in 2000i32..2100,
            month in 6u32..=10,
            day in 1u32..=28
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let estimate = estimate_delay(&reading, date);
            prop_assert_eq!(estimate.minutes, 5);
            prop_assert_eq!(estimate.cause, DelayCause::HeavyRain);
        }

        /// Cause and minutes always agree
        #[test]
        fn cause_matches_minutes(reading in any_reading(), date in any_date()) {
            let estimate = estimate_delay(&reading, date);
            let expected = match estimate.cause {
                DelayCause::HeavyRain => 5,
                DelayCause::Fog => 3,
                DelayCause::HeatTraffic => 2,
                DelayCause::Clear => 0,
            };
            prop_assert_eq!(estimate.minutes, expected);
        }

        /// Adjusting an arrival always renders as valid zero-padded HH:MM
        #[test]
        fn adjusted_arrival_well_formed(
            hour in 0u8..24,
            minute in 0u8..60,
            delay in 0u32..600
        ) {
            let schedule = BusSchedule {
                bus_number: BusNumber::parse("VVCE-01").unwrap(),
                route: "Campus to City".into(),
                departure: ScheduleTime::from_hm(0, 0).unwrap(),
                arrival: ScheduleTime::from_hm(hour, minute).unwrap(),
                stops: vec![],
                frequency: String::new(),
            };
            let rendered = adjusted_arrival(&schedule, delay).to_string();
            prop_assert_eq!(rendered.len(), 5);
            prop_assert!(ScheduleTime::parse_hhmm(&rendered).is_ok());
        }
    }
}
