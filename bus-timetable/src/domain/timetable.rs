//! A collection of timetable services.

use super::Service;

/// An in-memory table of services.
///
/// Duplicate and overlapping services are legal; no uniqueness constraint
/// is imposed. Two timetables compare equal when they hold the same
/// multiset of services — ordering only matters in the serialized text
/// form, not at the data-model level.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    services: Vec<Service>,
}

impl Timetable {
    /// Create a timetable from a materialized list of services.
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// The services in input order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Number of services in the table.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if the table holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl PartialEq for Timetable {
    fn eq(&self, other: &Self) -> bool {
        if self.services.len() != other.services.len() {
            return false;
        }

        // Multiset comparison; tables are small enough that quadratic
        // matching is fine.
        let mut unmatched: Vec<&Service> = other.services.iter().collect();
        for service in &self.services {
            match unmatched.iter().position(|candidate| *candidate == service) {
                Some(i) => {
                    unmatched.swap_remove(i);
                }
                None => return false,
            }
        }
        true
    }
}

impl Eq for Timetable {}
