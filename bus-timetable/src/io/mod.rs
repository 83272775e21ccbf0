//! Reading and writing the timetable text format.
//!
//! Parsing and rendering are pure functions; the actual file access goes
//! through the narrow [`FileRead`] and [`FileWrite`] capability seams so
//! everything above them is testable without a file system.

mod error;
mod fs;
mod reader;
mod writer;

pub use error::{ParseError, ReadError, TimeField};
pub use fs::LocalFs;
pub use reader::{FileRead, TimetableReader, parse_service_record, parse_timetable};
pub use writer::{FileWrite, TimetableWriter, format_timetable};
