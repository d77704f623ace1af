//! The static shuttle timetable.
//!
//! The timetable is fixed configuration data: built once at startup and
//! never mutated. Validation happens here, at the boundary, so the delay
//! calculator can assume every schedule it sees is well-formed.

use std::collections::HashSet;

use crate::domain::{BusNumber, BusSchedule, ScheduleTime};

/// Errors from timetable construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimetableError {
    /// Two schedules share a bus number.
    #[error("duplicate bus number: {0}")]
    DuplicateBusNumber(BusNumber),

    /// A schedule arrives at or before its departure.
    #[error("bus {bus}: arrival {arrival} is not after departure {departure}")]
    ArrivalNotAfterDeparture {
        bus: BusNumber,
        departure: ScheduleTime,
        arrival: ScheduleTime,
    },
}

/// An immutable collection of bus schedules.
///
/// Guarantees by construction that bus numbers are unique and every
/// schedule's arrival is after its departure on the same service day.
#[derive(Debug, Clone)]
pub struct Timetable {
    schedules: Vec<BusSchedule>,
}

impl Timetable {
    /// Validate and build a timetable from schedules.
    ///
    /// Order is preserved for display.
    pub fn new(schedules: Vec<BusSchedule>) -> Result<Self, TimetableError> {
        let mut seen = HashSet::new();

        for schedule in &schedules {
            if !seen.insert(schedule.bus_number.clone()) {
                return Err(TimetableError::DuplicateBusNumber(
                    schedule.bus_number.clone(),
                ));
            }
            if schedule.arrival <= schedule.departure {
                return Err(TimetableError::ArrivalNotAfterDeparture {
                    bus: schedule.bus_number.clone(),
                    departure: schedule.departure,
                    arrival: schedule.arrival,
                });
            }
        }

        Ok(Self { schedules })
    }

    /// The built-in campus timetable.
    pub fn campus_default() -> Self {
        let schedules = vec![
            campus_route(
                "VVCE-01",
                "16:00",
                "16:15",
                &["Campus Gate", "Main Road", "Market", "City Bus Stand"],
            ),
            campus_route("VVCE-02", "17:00", "17:20", &["Campus Gate", "R-GATE"]),
            campus_route(
                "VVCE-03",
                "18:00",
                "18:15",
                &["Campus Gate", "Mall Road", "Sabar Bus Stand"],
            ),
        ];

        // The built-in table is known valid.
        Self::new(schedules).expect("built-in timetable is valid")
    }

    /// Look up a schedule by bus number.
    pub fn get(&self, bus_number: &BusNumber) -> Option<&BusSchedule> {
        self.schedules
            .iter()
            .find(|s| &s.bus_number == bus_number)
    }

    /// Iterate schedules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BusSchedule> {
        self.schedules.iter()
    }

    /// Number of schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Returns true if the timetable has no schedules.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

/// Build one hourly campus-to-city schedule from literals.
fn campus_route(bus: &str, departure: &str, arrival: &str, stops: &[&str]) -> BusSchedule {
    BusSchedule {
        bus_number: BusNumber::parse(bus).expect("built-in bus number is valid"),
        route: "Campus to City".into(),
        departure: ScheduleTime::parse_hhmm(departure).expect("built-in time is valid"),
        arrival: ScheduleTime::parse_hhmm(arrival).expect("built-in time is valid"),
        stops: stops.iter().map(|s| s.to_string()).collect(),
        frequency: "Every hour".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(bus: &str, departure: &str, arrival: &str) -> BusSchedule {
        BusSchedule {
            bus_number: BusNumber::parse(bus).unwrap(),
            route: "Campus to City".into(),
            departure: ScheduleTime::parse_hhmm(departure).unwrap(),
            arrival: ScheduleTime::parse_hhmm(arrival).unwrap(),
            stops: vec!["Campus Gate".into()],
            frequency: "Every hour".into(),
        }
    }

    #[test]
    fn campus_default_loads() {
        let timetable = Timetable::campus_default();
        assert_eq!(timetable.len(), 3);

        let bus = BusNumber::parse("VVCE-01").unwrap();
        let first = timetable.get(&bus).unwrap();
        assert_eq!(first.departure.to_string(), "16:00");
        assert_eq!(first.arrival.to_string(), "16:15");
        assert_eq!(first.stops.len(), 4);
    }

    #[test]
    fn lookup_is_case_insensitive_via_parse() {
        let timetable = Timetable::campus_default();
        let bus = BusNumber::parse("vvce-02").unwrap();
        assert!(timetable.get(&bus).is_some());
    }

    #[test]
    fn unknown_bus_returns_none() {
        let timetable = Timetable::campus_default();
        let bus = BusNumber::parse("VVCE-99").unwrap();
        assert!(timetable.get(&bus).is_none());
    }

    #[test]
    fn rejects_duplicate_bus_numbers() {
        let result = Timetable::new(vec![
            schedule("VVCE-01", "16:00", "16:15"),
            schedule("VVCE-01", "17:00", "17:20"),
        ]);
        assert!(matches!(
            result,
            Err(TimetableError::DuplicateBusNumber(_))
        ));
    }

    #[test]
    fn rejects_arrival_before_departure() {
        let result = Timetable::new(vec![schedule("VVCE-01", "16:15", "16:00")]);
        assert!(matches!(
            result,
            Err(TimetableError::ArrivalNotAfterDeparture { .. })
        ));
    }

    #[test]
    fn rejects_arrival_equal_to_departure() {
        let result = Timetable::new(vec![schedule("VVCE-01", "16:00", "16:00")]);
        assert!(result.is_err());
    }

    #[test]
    fn preserves_insertion_order() {
        let timetable = Timetable::campus_default();
        let numbers: Vec<_> = timetable.iter().map(|s| s.bus_number.as_str()).collect();
        assert_eq!(numbers, ["VVCE-01", "VVCE-02", "VVCE-03"]);
    }

    #[test]
    fn empty_timetable_is_valid() {
        let timetable = Timetable::new(vec![]).unwrap();
        assert!(timetable.is_empty());
    }

    #[test]
    fn error_display() {
        let bus = BusNumber::parse("VVCE-01").unwrap();
        let err = TimetableError::DuplicateBusNumber(bus.clone());
        assert_eq!(err.to_string(), "duplicate bus number: VVCE-01");

        let err = TimetableError::ArrivalNotAfterDeparture {
            bus,
            departure: ScheduleTime::parse_hhmm("16:15").unwrap(),
            arrival: ScheduleTime::parse_hhmm("16:00").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "bus VVCE-01: arrival 16:00 is not after departure 16:15"
        );
    }
}
