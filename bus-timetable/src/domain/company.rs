//! Bus company identifier type.

use std::fmt;

/// Error returned when parsing an unknown company identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bus company")]
pub struct UnknownCompany;

/// A bus company operating timetable services.
///
/// The timetable format recognizes exactly two companies; identifiers are
/// matched case-sensitively and anything else is rejected at parse time.
///
/// # Examples
///
/// ```
/// use bus_timetable::domain::BusCompany;
///
/// let posh = BusCompany::parse("Posh").unwrap();
/// assert_eq!(posh.as_str(), "Posh");
///
/// // Case matters
/// assert!(BusCompany::parse("posh").is_err());
/// assert!(BusCompany::parse("POSH").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusCompany {
    /// The premium operator, favoured when two services cover the same
    /// time window.
    Posh,
    /// The budget operator.
    Grotty,
}

impl BusCompany {
    /// Parse a company identifier from a string (exact, case-sensitive).
    pub fn parse(s: &str) -> Result<Self, UnknownCompany> {
        match s {
            "Posh" => Ok(BusCompany::Posh),
            "Grotty" => Ok(BusCompany::Grotty),
            _ => Err(UnknownCompany),
        }
    }

    /// Returns the company identifier as it appears in the text format.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusCompany::Posh => "Posh",
            BusCompany::Grotty => "Grotty",
        }
    }

    /// Whether this company wins a same-time-window tie against the other.
    pub fn is_preferred(&self) -> bool {
        matches!(self, BusCompany::Posh)
    }
}

impl fmt::Display for BusCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything outside the closed identifier set is rejected
        #[test]
        fn unknown_rejected(s in "[A-Za-z]{0,10}".prop_filter(
            "not a known id",
            |s| s != "Posh" && s != "Grotty"
        )) {
            prop_assert!(BusCompany::parse(&s).is_err());
        }
    }
}
