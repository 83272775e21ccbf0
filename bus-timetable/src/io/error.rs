//! Errors for the timetable text format.

use std::fmt;

use crate::domain::InvalidService;

/// Which time column of a record failed to parse.
///
/// Displays as the column name used in the input format documentation, so
/// error messages can name the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Departure,
    Arrival,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeField::Departure => "departureTime",
            TimeField::Arrival => "arrivalTime",
        })
    }
}

/// A timetable line that could not be parsed.
///
/// Rows are numbered 1-based over the sequence of non-blank lines fed to
/// the record parser. Every variant quotes the offending text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line did not split into exactly three single-space-separated
    /// tokens.
    #[error("Line on row {row} is not in correct format. Actual value: \"{line}\".")]
    LineFormat { row: usize, line: String },

    /// The first token is not a known company identifier.
    #[error("The companyId at line {row} is using an unknown format. Actual value: \"{value}\".")]
    UnknownCompanyId { row: usize, value: String },

    /// A time token failed the strict HH:MM grammar or range checks.
    #[error("The {field} at line {row} is using an unknown format. Actual value: \"{value}\".")]
    TimeFormat {
        field: TimeField,
        row: usize,
        value: String,
    },

    /// The record parsed but its times are out of order.
    #[error("The service at line {row} is invalid: {source}")]
    InvalidService {
        row: usize,
        #[source]
        source: InvalidService,
    },
}

impl ParseError {
    /// The 1-based row the error occurred on.
    pub fn row(&self) -> usize {
        match self {
            ParseError::LineFormat { row, .. }
            | ParseError::UnknownCompanyId { row, .. }
            | ParseError::TimeFormat { row, .. }
            | ParseError::InvalidService { row, .. } => *row,
        }
    }
}

/// Failure to produce a timetable from an input file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
