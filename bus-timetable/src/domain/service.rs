//! A single scheduled timetable service.

use std::fmt;

use chrono::Duration;

use super::{BusCompany, DayTime};

/// Error returned when a service's times are not in order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("departure time must be strictly before arrival time")]
pub struct InvalidService;

/// One scheduled departure/arrival record for one company.
///
/// Construction enforces that the departure is strictly before the
/// arrival, so code that receives a `Service` can rely on a positive
/// duration.
///
/// # Examples
///
/// ```
/// use bus_timetable::domain::{BusCompany, DayTime, Service};
///
/// let service = Service::new(
///     BusCompany::Posh,
///     DayTime::parse_hhmm("10:10").unwrap(),
///     DayTime::parse_hhmm("11:00").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(service.duration(), chrono::Duration::minutes(50));
/// assert_eq!(service.to_string(), "Posh 10:10 11:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Service {
    company: BusCompany,
    departure: DayTime,
    arrival: DayTime,
}

impl Service {
    /// Create a service, rejecting departure/arrival pairs out of order.
    pub fn new(
        company: BusCompany,
        departure: DayTime,
        arrival: DayTime,
    ) -> Result<Self, InvalidService> {
        if departure >= arrival {
            return Err(InvalidService);
        }
        Ok(Self {
            company,
            departure,
            arrival,
        })
    }

    /// The operating company.
    pub fn company(&self) -> BusCompany {
        self.company
    }

    /// Scheduled departure time.
    pub fn departure(&self) -> DayTime {
        self.departure
    }

    /// Scheduled arrival time.
    pub fn arrival(&self) -> DayTime {
        self.arrival
    }

    /// Time spent travelling; always positive.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }
}

impl fmt::Display for Service {
    /// Renders the canonical record form, e.g. `Posh 10:10 11:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.company, self.departure, self.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> DayTime {
        DayTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn construct_valid_service() {
        let service = Service::new(BusCompany::Posh, time("10:10"), time("11:00")).unwrap();

        assert_eq!(service.company(), BusCompany::Posh);
        assert_eq!(service.departure(), time("10:10"));
        assert_eq!(service.arrival(), time("11:00"));
    }

    #[test]
    fn reject_departure_after_arrival() {
        let result = Service::new(BusCompany::Posh, time("11:00"), time("10:10"));
        assert_eq!(result, Err(InvalidService));
    }

    #[test]
    fn reject_departure_equal_to_arrival() {
        let result = Service::new(BusCompany::Grotty, time("10:10"), time("10:10"));
        assert_eq!(result, Err(InvalidService));
    }

    #[test]
    fn duration() {
        let service = Service::new(BusCompany::Posh, time("10:10"), time("11:00")).unwrap();
        assert_eq!(service.duration(), Duration::minutes(50));

        let service = Service::new(BusCompany::Grotty, time("16:30"), time("18:45")).unwrap();
        assert_eq!(
            service.duration(),
            Duration::hours(2) + Duration::minutes(15)
        );
    }

    #[test]
    fn display() {
        let service = Service::new(BusCompany::Grotty, time("09:05"), time("10:00")).unwrap();
        assert_eq!(service.to_string(), "Grotty 09:05 10:00");
    }

    #[test]
    fn equality() {
        let a = Service::new(BusCompany::Posh, time("10:10"), time("11:00")).unwrap();
        let b = Service::new(BusCompany::Posh, time("10:10"), time("11:00")).unwrap();
        let c = Service::new(BusCompany::Grotty, time("10:10"), time("11:00")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
