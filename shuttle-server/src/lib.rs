//! Campus shuttle schedule and delay server.
//!
//! A small service that answers: "given today's weather, when will this
//! shuttle actually arrive?"

pub mod delay;
pub mod domain;
pub mod timetable;
pub mod weather;
pub mod web;
