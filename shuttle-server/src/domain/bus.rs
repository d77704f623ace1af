//! Bus identifiers and route records.

use std::fmt;

use super::ScheduleTime;

/// Error returned when parsing an invalid bus number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus number: {reason}")]
pub struct InvalidBusNumber {
    reason: &'static str,
}

/// Maximum length of a bus number, in characters.
const MAX_BUS_NUMBER_LEN: usize = 16;

/// A validated bus identifier such as "VVCE-01".
///
/// Bus numbers are short uppercase codes of ASCII letters, digits and
/// hyphens. Raw input is normalized (trimmed and uppercased) at parse time,
/// so lookups are insensitive to casing and stray whitespace.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::BusNumber;
///
/// let bus = BusNumber::parse("vvce-01").unwrap();
/// assert_eq!(bus.as_str(), "VVCE-01");
///
/// assert!(BusNumber::parse("").is_err());
/// assert!(BusNumber::parse("VVCE 01").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BusNumber(String);

impl BusNumber {
    /// Parse a bus number from a string, normalizing case and whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidBusNumber> {
        let normalized = s.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(InvalidBusNumber {
                reason: "must not be empty",
            });
        }
        if normalized.len() > MAX_BUS_NUMBER_LEN {
            return Err(InvalidBusNumber {
                reason: "too long (max 16 characters)",
            });
        }
        for c in normalized.chars() {
            if !(c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-') {
                return Err(InvalidBusNumber {
                    reason: "must be ASCII letters, digits and hyphens",
                });
            }
        }

        Ok(Self(normalized))
    }

    /// Returns the bus number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BusNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusNumber({})", self.0)
    }
}

impl fmt::Display for BusNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed bus route record.
///
/// Schedules are configuration data: created once at startup and never
/// mutated. Departure and arrival are on the same service day, with arrival
/// after departure; the [`Timetable`](crate::timetable::Timetable) checks
/// that ordering at construction time, so computation over a schedule can
/// assume it.
#[derive(Debug, Clone)]
pub struct BusSchedule {
    /// Unique identifier within the timetable.
    pub bus_number: BusNumber,

    /// Descriptive route label, e.g. "Campus to City".
    pub route: String,

    /// Scheduled departure from the first stop.
    pub departure: ScheduleTime,

    /// Scheduled arrival at the last stop.
    pub arrival: ScheduleTime,

    /// Ordered stop names, display only.
    pub stops: Vec<String>,

    /// Human-readable frequency, display only.
    pub frequency: String,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for valid bus number strings.
    fn valid_bus_number() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z0-9][A-Z0-9-]{0,15}")
            .unwrap()
            .prop_filter("max 16 chars", |s| s.len() <= 16)
    }

    proptest! {
        /// Any valid bus number parses
        #[test]
        fn valid_always_parses(s in valid_bus_number()) {
            prop_assert!(BusNumber::parse(&s).is_ok());
        }

        /// Parsing is idempotent: reparsing the normalized form changes nothing
        #[test]
        fn parse_idempotent(s in valid_bus_number()) {
            let first = BusNumber::parse(&s).unwrap();
            let second = BusNumber::parse(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Lowercase input normalizes to the uppercase form
        #[test]
        fn case_insensitive(s in valid_bus_number()) {
            let lower = BusNumber::parse(&s.to_ascii_lowercase()).unwrap();
            let upper = BusNumber::parse(&s).unwrap();
            prop_assert_eq!(lower, upper);
        }
    }
}
