//! Domain types for the timetable processor.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod company;
mod service;
mod time;
mod timetable;

pub use company::{BusCompany, UnknownCompany};
pub use service::{InvalidService, Service};
pub use time::{DayTime, TimeError};
pub use timetable::Timetable;
