//! Reading timetables from the line-oriented text format.
//!
//! The format is one service per line, three tokens separated by exactly
//! one ASCII space:
//!
//! ```text
//! Posh 10:15 11:10
//! Posh 10:10 11:00
//! Grotty 10:10 11:00
//! Grotty 16:30 18:45
//! ```
//!
//! Blank and whitespace-only lines are skipped and do not count toward
//! the row numbers reported in errors.

use std::future::Future;
use std::io;
use std::path::Path;

use tracing::debug;

use super::error::{ParseError, ReadError, TimeField};
use crate::domain::{BusCompany, DayTime, Service, Timetable};

/// Capability to read a whole text file.
///
/// The reader is injected with this narrow seam so parsing stays pure and
/// testable without a file system.
pub trait FileRead {
    /// Read the entire file at `path` into a string.
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send;
}

/// Reads timetables through an injected [`FileRead`] capability.
pub struct TimetableReader<R> {
    source: R,
}

impl<R: FileRead> TimetableReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read and parse the timetable at `path`.
    ///
    /// I/O errors from the capability pass through unchanged; the first
    /// malformed line aborts the read.
    pub async fn read_timetable(&self, path: &Path) -> Result<Timetable, ReadError> {
        let contents = self.source.read_to_string(path).await?;
        let timetable = parse_timetable(&contents)?;
        debug!(services = timetable.len(), "parsed timetable");
        Ok(timetable)
    }
}

/// Parse a whole timetable file.
///
/// Accepts both `\n` and `\r\n` line breaks. Rows are numbered 1-based
/// over the non-blank lines only, matching the row numbers quoted in
/// parse errors.
pub fn parse_timetable(contents: &str) -> Result<Timetable, ParseError> {
    let services = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_service_record(line, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Timetable::new(services))
}

/// Parse one service record.
///
/// The line must consist of exactly three tokens separated by exactly one
/// ASCII space each — consecutive spaces produce empty tokens and fail
/// the count check, so no collapsing or trimming ever happens.
pub fn parse_service_record(line: &str, row: usize) -> Result<Service, ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();

    if parts.len() != 3 {
        return Err(ParseError::LineFormat {
            row,
            line: line.to_string(),
        });
    }

    let company = BusCompany::parse(parts[0]).map_err(|_| ParseError::UnknownCompanyId {
        row,
        value: parts[0].to_string(),
    })?;
    let departure = parse_time_field(parts[1], TimeField::Departure, row)?;
    let arrival = parse_time_field(parts[2], TimeField::Arrival, row)?;

    Service::new(company, departure, arrival)
        .map_err(|source| ParseError::InvalidService { row, source })
}

fn parse_time_field(value: &str, field: TimeField, row: usize) -> Result<DayTime, ParseError> {
    DayTime::parse_hhmm(value).map_err(|_| ParseError::TimeFormat {
        field,
        row,
        value: value.to_string(),
    })
}
