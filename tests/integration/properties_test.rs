//! Algebraic properties of the dynamic filter.
//!
//! Each property is checked over every non-empty predicate selection and a
//! generated grid of flights.

use ff_error::FfError;
use ff_filter::{CATALOG, SegmentPredicate};
use integration_tests::{fixed_filter, flight_grid, index_subsets, is_subsequence, reference_now};

#[test]
fn test_superset_selection_is_at_least_as_strict() {
    let filter = fixed_filter();
    let flights = flight_grid();
    let subsets = index_subsets();

    for small in &subsets {
        let loose = filter.filter(&flights, small).unwrap();
        for large in &subsets {
            if !small.iter().all(|i| large.contains(i)) {
                continue;
            }
            let strict = filter.filter(&flights, large).unwrap();
            assert!(
                is_subsequence(&strict, &loose),
                "{large:?} kept a flight that {small:?} rejected"
            );
        }
    }
}

#[test]
fn test_single_index_keeps_exactly_passing_flights() {
    let filter = fixed_filter();
    let flights = flight_grid();

    for predicate in CATALOG {
        let expected: Vec<_> = flights
            .iter()
            .filter(|f| {
                f.segments()
                    .iter()
                    .all(|s| predicate.evaluate(s, reference_now()))
            })
            .cloned()
            .collect();

        let kept = filter.filter(&flights, &[predicate.index()]).unwrap();
        assert_eq!(kept, expected, "mismatch for {predicate}");
    }
}

#[test]
fn test_selection_order_does_not_matter() {
    let filter = fixed_filter();
    let flights = flight_grid();

    let forward = filter.filter(&flights, &[0, 1, 2]).unwrap();
    for order in [[2, 1, 0], [1, 0, 2], [0, 2, 1], [1, 2, 0], [2, 0, 1]] {
        assert_eq!(filter.filter(&flights, &order).unwrap(), forward);
    }
}

#[test]
fn test_duplicate_indices_do_not_matter() {
    let filter = fixed_filter();
    let flights = flight_grid();

    assert_eq!(
        filter.filter(&flights, &[2, 2, 0, 2]).unwrap(),
        filter.filter(&flights, &[0, 2]).unwrap()
    );
}

#[test]
fn test_filter_is_idempotent() {
    let filter = fixed_filter();
    let flights = flight_grid();

    for indices in index_subsets() {
        let once = filter.filter(&flights, &indices).unwrap();
        let twice = filter.filter(&once, &indices).unwrap();
        assert_eq!(once, twice, "not idempotent for {indices:?}");
    }
}

#[test]
fn test_output_preserves_input_order() {
    let filter = fixed_filter();
    let flights = flight_grid();

    for indices in index_subsets() {
        let kept = filter.filter(&flights, &indices).unwrap();
        assert!(is_subsequence(&kept, &flights));
    }
}

#[test]
fn test_out_of_range_index_produces_no_output() {
    let filter = fixed_filter();
    let flights = flight_grid();

    for indices in [vec![5], vec![0, 1, 5], vec![3, 0]] {
        match filter.filter(&flights, &indices) {
            Err(FfError::InvalidIndex { catalog_size, .. }) => assert_eq!(catalog_size, 3),
            other => panic!("{indices:?} should fail with InvalidIndex, got {other:?}"),
        }
    }
}

#[test]
fn test_typed_and_indexed_selection_agree() {
    let filter = fixed_filter();
    let flights = flight_grid();

    for indices in index_subsets() {
        let predicates = SegmentPredicate::from_indices(&indices).unwrap();
        assert_eq!(
            filter.filter_by(&flights, &predicates).unwrap(),
            filter.filter(&flights, &indices).unwrap()
        );
    }
}

#[test]
fn test_stats_account_for_every_flight() {
    let filter = fixed_filter();
    let flights = flight_grid();

    for indices in index_subsets() {
        let (kept, stats) = filter.filter_with_stats(&flights, &indices).unwrap();
        assert_eq!(stats.flights_examined, flights.len());
        assert_eq!(stats.flights_kept, kept.len());
        assert_eq!(stats.flights_kept + stats.flights_rejected, flights.len());
        assert!(stats.segments_evaluated >= flights.len());
    }
}
