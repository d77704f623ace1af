//! Domain types for the shuttle service.
//!
//! Core types representing validated timetable data. Invariants are
//! enforced at construction time, so code that receives these types can
//! trust their validity.

mod bus;
mod time;

pub use bus::{BusNumber, BusSchedule, InvalidBusNumber};
pub use time::{InvalidTimeFormat, ScheduleTime};
