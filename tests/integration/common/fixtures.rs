//! Test fixtures.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ff_filter::{DynamicFilter, FixedClock, catalog_size};
use ff_types::Flight;

/// Leg lengths in minutes, chosen around every predicate boundary.
const LEG_MINUTES: [i64; 8] = [-120, 0, 30, 60, 120, 179, 180, 240];

/// Departure offsets from `reference_now`, in hours.
const START_HOURS: [i64; 3] = [-48, 0, 24];

/// The instant every fixture is built against.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A filter pinned to `reference_now`.
pub fn fixed_filter() -> DynamicFilter<FixedClock> {
    DynamicFilter::with_clock(FixedClock::new(reference_now()))
}

/// Every one- and two-leg flight over `START_HOURS` x `LEG_MINUTES`.
///
/// Second legs depart one hour after the first leg's arrival time.
pub fn flight_grid() -> Vec<Flight> {
    let mut flights = Vec::new();

    for start in START_HOURS {
        let dep = reference_now() + Duration::hours(start);

        for first in LEG_MINUTES {
            let arr = dep + Duration::minutes(first);
            flights.push(Flight::from_dates(&[dep, arr]).unwrap());

            for second in LEG_MINUTES {
                let dep2 = arr + Duration::hours(1);
                let arr2 = dep2 + Duration::minutes(second);
                flights.push(Flight::from_dates(&[dep, arr, dep2, arr2]).unwrap());
            }
        }
    }

    flights
}

/// All non-empty subsets of the catalog, as ascending index lists.
pub fn index_subsets() -> Vec<Vec<usize>> {
    let n = catalog_size();
    (1..(1u32 << n))
        .map(|mask| (0..n).filter(|i| mask & (1 << i) != 0).collect())
        .collect()
}

/// Whether `sub` appears in `full` in the same relative order.
pub fn is_subsequence(sub: &[Flight], full: &[Flight]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|f| rest.any(|g| g == f))
}
