//! Bus timetable filtering tool.
//!
//! Reads a line-oriented table of scheduled bus services, keeps the best
//! service per time window (short enough, undominated, preferred company
//! on exact ties), and writes the survivors grouped by company.

pub mod domain;
pub mod io;
pub mod processor;
pub mod selection;
