//! Wall-clock times for the shuttle timetable.
//!
//! Timetable times are "HH:MM" strings on a single service day. This module
//! provides a validated time-of-day type. Adding a delay wraps modulo 24
//! hours; the date is deliberately not tracked, because delays in this
//! domain are single-digit minutes and never span a full day.

use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time format: {reason}")]
pub struct InvalidTimeFormat {
    reason: &'static str,
}

impl InvalidTimeFormat {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A validated time of day for the shuttle timetable.
///
/// Guaranteed by construction to hold an hour in 0-23 and a minute in 0-59,
/// so any `ScheduleTime` renders as a well-formed zero-padded "HH:MM".
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::ScheduleTime;
///
/// let arrival = ScheduleTime::parse_hhmm("16:15").unwrap();
/// assert_eq!(arrival.to_string(), "16:15");
///
/// // Delays wrap across midnight.
/// let late = ScheduleTime::parse_hhmm("23:50").unwrap().plus_minutes(15);
/// assert_eq!(late.to_string(), "00:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleTime {
    hour: u8,
    minute: u8,
}

impl ScheduleTime {
    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, InvalidTimeFormat> {
        if hour > 23 {
            return Err(InvalidTimeFormat::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(InvalidTimeFormat::new("minute must be 0-59"));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::ScheduleTime;
    ///
    /// // Valid times
    /// assert!(ScheduleTime::parse_hhmm("00:00").is_ok());
    /// assert!(ScheduleTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ScheduleTime::parse_hhmm("1615").is_err());
    /// assert!(ScheduleTime::parse_hhmm("16:5").is_err());
    /// assert!(ScheduleTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, InvalidTimeFormat> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(InvalidTimeFormat::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(InvalidTimeFormat::new("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| InvalidTimeFormat::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| InvalidTimeFormat::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Add a number of minutes, wrapping modulo 24 hours.
    ///
    /// Only the time of day is kept. A sum that crosses midnight rolls over
    /// without tracking the date change.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        let total = self.minutes_from_midnight() + minutes;
        Self {
            hour: ((total / 60) % 24) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse two ASCII digit bytes into a u8.
fn parse_two_digits(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some((d1 * 10 + d2) as u8)
}
