mod common;
use common::{approx, date, driving, first_day_events, off_duty, sleeper};
use eldlog::core::calculator::aggregator::{summarize, summarize_events, summarize_trip};
use eldlog::core::calculator::segmenter::segment;
use eldlog::models::{EventKind, EventStatus, LogSheet, TimelineEvent};

#[test]
fn test_first_day_totals() {
    let sheet = LogSheet::new(date("2024-10-30"), first_day_events());
    let s = summarize(&sheet);

    assert_eq!(s.driving_time_hours, 5.5);
    assert_eq!(s.distance_miles, 330.0);
    assert_eq!(s.total_duty_hours, 6.0);
}

#[test]
fn test_empty_sheet_is_all_zero() {
    let s = summarize_events(&[]);

    assert_eq!(s.driving_time_hours, 0.0);
    assert_eq!(s.distance_miles, 0.0);
    assert_eq!(s.total_duty_hours, 0.0);
}

#[test]
fn test_distance_only_counts_while_driving() {
    // a non-driving event carrying a distance must not add miles
    let odd = TimelineEvent::new(
        EventKind::Fuel,
        common::ts("2024-10-30 12:00"),
        0.5,
        EventStatus::from_label("On Duty (Not Driving)"),
    )
    .with_distance(12.0);

    let s = summarize_events(&[driving("2024-10-30 08:00", 2.0, 110.0), odd]);

    assert!(approx(s.distance_miles, 110.0));
    assert!(approx(s.total_duty_hours, 2.5));
}

#[test]
fn test_total_includes_every_status() {
    let events = vec![
        off_duty("2024-10-30 00:00", 6.0),
        sleeper("2024-10-30 06:00", 2.0),
        driving("2024-10-30 08:00", 3.0, 150.0),
    ];

    let s = summarize_events(&events);

    assert!(approx(s.total_duty_hours, 11.0));
    assert!(approx(s.driving_time_hours, 3.0));
}

#[test]
fn test_unrecognized_status_counts_toward_total_only() {
    let ev = TimelineEvent::new(
        EventKind::Break,
        common::ts("2024-10-30 10:00"),
        1.5,
        EventStatus::from_label("Personal Conveyance"),
    );

    let s = summarize_events(&[ev]);

    assert!(approx(s.total_duty_hours, 1.5));
    assert_eq!(s.driving_time_hours, 0.0);
}

#[test]
fn test_driving_never_exceeds_total() {
    let sheets = segment(&[
        driving("2024-10-30 08:00", 4.5, 270.0),
        off_duty("2024-10-30 12:30", 0.5),
        driving("2024-10-31 08:00", 11.0, 600.0),
    ]);

    for sheet in &sheets {
        let s = summarize(sheet);
        assert!(s.driving_time_hours <= s.total_duty_hours);
        assert!(s.distance_miles >= 0.0);
    }
}

#[test]
fn test_trip_totals_sum_the_days() {
    let sheets = segment(&[
        driving("2024-10-30 08:00", 4.5, 270.0),
        off_duty("2024-10-30 12:30", 0.5),
        driving("2024-10-31 08:00", 3.0, 180.0),
    ]);

    let trip = summarize_trip(&sheets);

    assert!(approx(trip.driving_time_hours, 7.5));
    assert!(approx(trip.distance_miles, 450.0));
    assert!(approx(trip.total_duty_hours, 8.0));
}
