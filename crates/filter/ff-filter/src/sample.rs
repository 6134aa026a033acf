//! Sample flights for demos and tests.
//!
//! Six itineraries, each built to trip a particular predicate. All times
//! are relative to a base instant three days after `now`.

use chrono::{DateTime, Duration, Utc};
use ff_error::Result;
use ff_types::Flight;

/// Build the six sample flights.
///
/// | # | Shape | Fails |
/// |---|-------|-------|
/// | 1 | one 2h leg | nothing |
/// | 2 | 1h leg, then a 3h leg | `short_window` |
/// | 3 | one 2h leg six days before the base, so in the past | `future_departure` |
/// | 4 | one leg arriving 6h before it departs | `departure_before_arrival`, `short_window` |
/// | 5 | 2h leg, 3h on the ground, then a 3h leg | `short_window` |
/// | 6 | 2h and 1h legs, 3h on the ground, then a 30m leg | `short_window` |
pub fn create_flights(now: DateTime<Utc>) -> Result<Vec<Flight>> {
    let base = now + Duration::days(3);
    let h = Duration::hours;

    Ok(vec![
        Flight::from_dates(&[base, base + h(2)])?,
        Flight::from_dates(&[base, base + h(1), base + h(2), base + h(5)])?,
        Flight::from_dates(&[base - Duration::days(6), base - Duration::days(6) + h(2)])?,
        Flight::from_dates(&[base, base - h(6)])?,
        Flight::from_dates(&[base, base + h(2), base + h(5), base + h(8)])?,
        Flight::from_dates(&[
            base,
            base + h(2),
            base + h(3),
            base + h(4),
            base + h(7),
            base + h(7) + Duration::minutes(30),
        ])?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SegmentPredicate;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn failing(predicate: SegmentPredicate) -> Vec<usize> {
        create_flights(now())
            .unwrap()
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.segments().iter().all(|s| predicate.evaluate(s, now())))
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[test]
    fn test_sample_shapes() {
        let flights = create_flights(now()).unwrap();
        let legs: Vec<usize> = flights.iter().map(|f| f.segments().len()).collect();
        assert_eq!(legs, vec![1, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_sample_failures_per_predicate() {
        assert_eq!(failing(SegmentPredicate::FutureDeparture), vec![3]);
        assert_eq!(failing(SegmentPredicate::DepartureBeforeArrival), vec![4]);
        assert_eq!(failing(SegmentPredicate::ShortWindow), vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_sample_display() {
        let flights = create_flights(now()).unwrap();
        assert_eq!(
            flights[0].to_string(),
            "[2024-06-04T12:00|2024-06-04T14:00]"
        );
        assert_eq!(
            flights[3].to_string(),
            "[2024-06-04T12:00|2024-06-04T06:00]"
        );
    }
}
