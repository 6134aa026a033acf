//! The six sample flights against each predicate.

use chrono::Duration;
use ff_filter::sample::create_flights;
use ff_types::{Flight, Segment};
use integration_tests::{fixed_filter, reference_now};

fn kept_numbers(indices: &[usize]) -> Vec<usize> {
    let flights = create_flights(reference_now()).unwrap();
    let kept = fixed_filter().filter(&flights, indices).unwrap();
    flights
        .iter()
        .enumerate()
        .filter(|(_, f)| kept.contains(f))
        .map(|(i, _)| i + 1)
        .collect()
}

#[test]
fn test_future_departure_excludes_past_flight() {
    assert_eq!(kept_numbers(&[0]), vec![1, 2, 4, 5, 6]);
}

#[test]
fn test_departure_before_arrival_excludes_backwards_flight() {
    assert_eq!(kept_numbers(&[1]), vec![1, 2, 3, 5, 6]);
}

#[test]
fn test_short_window_checks_every_segment() {
    // #2, #5 and #6 each have one passing leg and one failing leg
    assert_eq!(kept_numbers(&[2]), vec![1, 3]);
}

#[test]
fn test_all_predicates_keep_only_first_flight() {
    assert_eq!(kept_numbers(&[0, 1, 2]), vec![1]);
    assert_eq!(kept_numbers(&[2, 1, 0]), vec![1]);
}

#[test]
fn test_short_window_truncation_is_preserved() {
    // Whole-hour truncation lets a 2h59m leg through and stops a 59m leg
    let dep = reference_now() + Duration::days(1);
    let long = Flight::new(vec![Segment::new(dep, dep + Duration::minutes(179))]).unwrap();
    let short = Flight::new(vec![Segment::new(dep, dep + Duration::minutes(59))]).unwrap();
    let three = Flight::new(vec![Segment::new(dep, dep + Duration::hours(3))]).unwrap();

    let kept = fixed_filter()
        .filter(&[long.clone(), short, three], &[2])
        .unwrap();
    assert_eq!(kept, vec![long]);
}

#[test]
fn test_timestamps_with_offsets() {
    // Same instants written in two offsets behave identically
    let utc: Flight = "2024-06-02T08:00:00Z,2024-06-02T10:00:00Z".parse().unwrap();
    let cest: Flight = "2024-06-02T10:00:00+02:00,2024-06-02T12:00:00+02:00"
        .parse()
        .unwrap();

    let kept = fixed_filter()
        .filter(&[utc.clone(), cest.clone()], &[0, 1, 2])
        .unwrap();
    assert_eq!(kept, vec![utc, cest.clone()]);
    assert_eq!(cest.to_string(), "[2024-06-02T10:00|2024-06-02T12:00]");
}
