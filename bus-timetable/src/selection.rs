//! Service selection rules.
//!
//! Given a parsed timetable, keeps the services worth advertising: short
//! enough to ride, not beaten by another service, and not duplicated by
//! the preferred company over the same time window.

use chrono::Duration;

use crate::domain::{Service, Timetable};

/// Longest acceptable journey; services above this are dropped outright.
const SERVICE_TIME_LIMIT_MINS: i64 = 60;

/// Select the surviving services of a timetable.
///
/// Three rules are applied, each judged against the *original* input set
/// (not against intermediate results — a service excluded by one rule
/// still counts as competition for the others):
/// 1. duration at most 60 minutes (inclusive),
/// 2. no other service dominates it (see [`dominated`]),
/// 3. no preferred-company service covers the exact same time window.
///
/// Survivors are returned ordered by ascending departure time; services
/// sharing a departure keep their input order, so repeated runs over the
/// same input produce identical output.
pub fn select_best(timetable: &Timetable) -> Timetable {
    let all = timetable.services();

    let mut best: Vec<Service> = all
        .iter()
        .filter(|service| service.duration() <= Duration::minutes(SERVICE_TIME_LIMIT_MINS))
        .filter(|service| !dominated(service, all))
        .filter(|service| !loses_tie_to_preferred(service, all))
        .copied()
        .collect();

    best.sort_by_key(Service::departure);

    Timetable::new(best)
}

/// Is `service` beaten outright by another service?
///
/// A service is dominated when some other service departs no earlier and
/// arrives no later — leaving at the same time but arriving sooner,
/// leaving later for the same arrival, or both. A service with the exact
/// same departure and arrival does not dominate; equal windows are left to
/// the company tie-break.
fn dominated(service: &Service, all: &[Service]) -> bool {
    all.iter().any(|other| {
        other.departure() >= service.departure()
            && other.arrival() <= service.arrival()
            // Must be strictly better on at least one end
            && (other.departure() > service.departure() || other.arrival() < service.arrival())
    })
}

/// Does `service` lose the same-time-window tie-break?
///
/// A non-preferred service is dropped when a preferred-company service
/// with the identical departure and arrival exists. Equal windows within
/// the same company are left alone.
fn loses_tie_to_preferred(service: &Service, all: &[Service]) -> bool {
    !service.company().is_preferred()
        && all.iter().any(|other| {
            other.company().is_preferred()
                && other.departure() == service.departure()
                && other.arrival() == service.arrival()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusCompany, DayTime};

    fn service(company: BusCompany, dep: &str, arr: &str) -> Service {
        Service::new(
            company,
            DayTime::parse_hhmm(dep).unwrap(),
            DayTime::parse_hhmm(arr).unwrap(),
        )
        .unwrap()
    }

    fn posh(dep: &str, arr: &str) -> Service {
        service(BusCompany::Posh, dep, arr)
    }

    fn grotty(dep: &str, arr: &str) -> Service {
        service(BusCompany::Grotty, dep, arr)
    }

    #[test]
    fn full_corpus_scenario() {
        let input = Timetable::new(vec![
            posh("10:15", "11:10"),
            posh("10:10", "11:00"),
            grotty("10:10", "11:00"),
            grotty("16:30", "18:45"),
            posh("12:05", "12:30"),
            grotty("12:30", "13:25"),
            grotty("12:45", "13:25"),
            posh("17:25", "18:01"),
        ]);

        let expected = vec![
            posh("10:10", "11:00"),
            posh("10:15", "11:10"),
            posh("12:05", "12:30"),
            grotty("12:45", "13:25"),
            posh("17:25", "18:01"),
        ];

        assert_eq!(select_best(&input).services(), expected);
    }

    #[test]
    fn same_arrival_keeps_latest_departure() {
        let input = Timetable::new(vec![
            posh("10:10", "11:00"),
            posh("10:20", "11:00"),
            posh("10:15", "11:00"),
        ]);

        assert_eq!(select_best(&input).services(), [posh("10:20", "11:00")]);
    }

    #[test]
    fn same_departure_keeps_earliest_arrival() {
        let input = Timetable::new(vec![
            posh("10:10", "10:55"),
            posh("10:10", "10:50"),
            posh("10:10", "11:00"),
        ]);

        assert_eq!(select_best(&input).services(), [posh("10:10", "10:50")]);
    }

    #[test]
    fn nested_window_keeps_inner_service() {
        // The middle service departs later and arrives earlier than both
        // others, so it beats them on both ends.
        let input = Timetable::new(vec![
            posh("10:10", "10:55"),
            posh("10:20", "10:50"),
            posh("10:15", "11:00"),
        ]);

        assert_eq!(select_best(&input).services(), [posh("10:20", "10:50")]);
    }

    #[test]
    fn services_longer_than_one_hour_are_dropped() {
        let input = Timetable::new(vec![posh("10:10", "11:15")]);
        assert!(select_best(&input).is_empty());
    }

    #[test]
    fn exactly_one_hour_passes() {
        let input = Timetable::new(vec![posh("10:00", "11:00")]);
        assert_eq!(select_best(&input).services(), [posh("10:00", "11:00")]);
    }

    #[test]
    fn same_window_drops_grotty() {
        let input = Timetable::new(vec![posh("10:10", "10:50"), grotty("10:10", "10:50")]);
        assert_eq!(select_best(&input).services(), [posh("10:10", "10:50")]);
    }

    #[test]
    fn same_window_grotty_only_all_survive() {
        let input = Timetable::new(vec![grotty("10:10", "10:50"), grotty("10:10", "10:50")]);
        assert_eq!(
            select_best(&input).services(),
            [grotty("10:10", "10:50"), grotty("10:10", "10:50")]
        );
    }

    #[test]
    fn equal_windows_same_company_both_survive() {
        let input = Timetable::new(vec![posh("10:10", "10:50"), posh("10:10", "10:50")]);
        assert_eq!(select_best(&input).len(), 2);
    }

    #[test]
    fn survivors_are_ordered_by_departure() {
        let input = Timetable::new(vec![
            posh("12:10", "12:50"),
            grotty("10:10", "10:50"),
            posh("11:10", "11:50"),
        ]);

        let expected = vec![
            grotty("10:10", "10:50"),
            posh("11:10", "11:50"),
            posh("12:10", "12:50"),
        ];

        assert_eq!(select_best(&input).services(), expected);
    }

    #[test]
    fn dominance_is_judged_against_the_full_input() {
        // The 09:30 run is dominated by the 10:00 run even though the
        // 10:00 run is itself dropped by the duration filter.
        let input = Timetable::new(vec![grotty("09:30", "11:30"), grotty("10:00", "11:30")]);
        assert!(select_best(&input).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(select_best(&Timetable::new(vec![])).is_empty());
    }
}
