mod common;
use common::{approx, driving, off_duty, sleeper, ts};
use eldlog::core::calculator::gaps::{DiscontinuityKind, find_discontinuities, midnight_crossings};
use chrono::NaiveDateTime;
use eldlog::core::calculator::segmenter::segment;
use eldlog::core::grid::{CanvasSize, GridStyle, render};
use eldlog::core::ingest::{parse_timeline_str, sort_by_start};
use eldlog::errors::AppError;
use eldlog::models::{DutyStatus, EventKind, EventStatus};

#[test]
fn test_bare_array_and_trip_object_are_equivalent() {
    let array = r#"[
        {"type": "driving", "start_time": "2024-10-30T08:00:00", "duration": 4.5, "distance": 270, "status": "Driving"},
        {"type": "fuel", "start_time": "2024-10-30T12:30:00", "duration": 0.5, "location": "Fuel Stop 1", "status": "On Duty (Not Driving)"}
    ]"#;
    let trip = format!(r#"{{"route": {{"total_distance": 270}}, "timeline": {array}}}"#);

    let a = parse_timeline_str(array).expect("array input");
    let b = parse_timeline_str(&trip).expect("trip input");

    assert_eq!(a, b);
    assert_eq!(a[0].kind, EventKind::Driving);
    assert_eq!(a[0].distance_miles, Some(270.0));
    assert_eq!(a[1].location.as_deref(), Some("Fuel Stop 1"));
    assert_eq!(a[1].status, EventStatus::Known(DutyStatus::OnDutyNotDriving));
}

#[test]
fn test_kind_alias_and_short_timestamps() {
    let json = r#"[{"kind": "pickup", "start_time": "2024-10-30 14:00", "duration": 1, "status": "On Duty (Not Driving)"}]"#;
    let events = parse_timeline_str(json).expect("valid input");

    assert_eq!(events[0].kind, EventKind::Pickup);
    assert_eq!(events[0].start_time, ts("2024-10-30 14:00"));
}

#[test]
fn test_offset_timestamp_keeps_its_wall_clock() {
    let json = r#"[{"type": "driving", "start_time": "2024-10-30T23:30:00-07:00", "duration": 1, "status": "Driving"}]"#;
    let events = parse_timeline_str(json).expect("valid input");

    assert_eq!(events[0].start_time, ts("2024-10-30 23:30"));
    assert_eq!(segment(&events)[0].date, common::date("2024-10-30"));
}

#[test]
fn test_rejects_non_positive_duration() {
    for bad in ["0", "-1.5"] {
        let json = format!(
            r#"[{{"type": "rest", "start_time": "2024-10-30T08:00:00", "duration": {bad}, "status": "Off Duty"}}]"#
        );
        let err = parse_timeline_str(&json).expect_err("duration must be rejected");
        assert!(matches!(err, AppError::InvalidDuration { index: 0, .. }));
    }
}

#[test]
fn test_rejects_duration_overflowing_the_calendar() {
    for bad in ["1e10", "1e300"] {
        let json = format!(
            r#"[{{"type": "rest", "start_time": "2024-10-30T08:00:00", "duration": {bad}, "status": "Off Duty"}}]"#
        );
        let err = parse_timeline_str(&json).expect_err("duration must be rejected");
        assert!(matches!(err, AppError::InvalidDuration { index: 0, .. }));
    }
}

#[test]
fn test_rejects_negative_distance() {
    let json = r#"[
        {"type": "driving", "start_time": "2024-10-30T08:00:00", "duration": 1, "distance": 50, "status": "Driving"},
        {"type": "driving", "start_time": "2024-10-30T09:00:00", "duration": 1, "distance": -3, "status": "Driving"}
    ]"#;

    let err = parse_timeline_str(json).expect_err("negative distance");
    assert!(matches!(err, AppError::InvalidDistance { index: 1, .. }));
}

#[test]
fn test_rejects_unknown_event_type() {
    let json = r#"[{"type": "teleport", "start_time": "2024-10-30T08:00:00", "duration": 1, "status": "Driving"}]"#;

    let err = parse_timeline_str(json).expect_err("unknown type");
    assert!(err.to_string().contains("teleport"));
}

#[test]
fn test_unknown_status_is_kept_not_rejected() {
    let json = r#"[{"type": "break", "start_time": "2024-10-30T08:00:00", "duration": 1, "status": "Personal Conveyance"}]"#;
    let events = parse_timeline_str(json).expect("unknown status is accepted");

    assert_eq!(
        events[0].status,
        EventStatus::Unrecognized("Personal Conveyance".to_string())
    );
    assert_eq!(events[0].status.row(), 0);
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = parse_timeline_str("{ not json").expect_err("bad json");
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn test_sort_by_start_is_stable_and_reports_order() {
    let mut ordered = vec![driving("2024-10-30 08:00", 1.0, 50.0), off_duty("2024-10-30 09:00", 1.0)];
    assert!(sort_by_start(&mut ordered));

    let mut events = vec![
        off_duty("2024-10-30 12:00", 1.0),
        driving("2024-10-30 08:00", 1.0, 50.0),
        sleeper("2024-10-30 08:00", 1.0),
    ];
    assert!(!sort_by_start(&mut events));
    assert_eq!(events[0].kind, EventKind::Driving);
    assert_eq!(events[1].status, EventStatus::Known(DutyStatus::SleeperBerth));
    assert_eq!(events[2].start_time, ts("2024-10-30 12:00"));
}

#[test]
fn test_gap_and_overlap_detection() {
    let events = vec![
        driving("2024-10-30 08:00", 2.0, 100.0),
        // 30 minute gap
        off_duty("2024-10-30 10:30", 1.0),
        // starts 15 minutes before the previous one ends
        driving("2024-10-30 11:15", 1.0, 50.0),
        // back to back
        off_duty("2024-10-30 12:15", 1.0),
    ];

    let found = find_discontinuities(&events);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].kind, DiscontinuityKind::Gap);
    assert_eq!(found[0].after_index, 0);
    assert_eq!(found[0].minutes, 30);
    assert_eq!(found[1].kind, DiscontinuityKind::Overlap);
    assert_eq!(found[1].after_index, 1);
    assert_eq!(found[1].minutes, 15);
}

#[test]
fn test_float_noise_is_not_a_gap() {
    // 1/3 h does not land on a whole second
    let events = vec![
        driving("2024-10-30 08:00", 1.0 / 3.0, 20.0),
        off_duty("2024-10-30 08:20", 1.0),
    ];

    assert!(find_discontinuities(&events).is_empty());
}

#[test]
fn test_midnight_crossing_is_reported() {
    let sheets = segment(&[
        driving("2024-10-30 18:00", 4.0, 240.0),
        sleeper("2024-10-30 22:00", 10.0),
    ]);

    let crossings = midnight_crossings(&sheets[0]);

    assert_eq!(crossings.len(), 1);
    assert_eq!(crossings[0].event_index, 1);
    assert_eq!(crossings[0].end_time, ts("2024-10-31 08:00"));
    assert!(approx(crossings[0].clipped_hours, 8.0));
}

#[test]
fn test_seconds_past_the_minute_still_cross_midnight() {
    let start = NaiveDateTime::parse_from_str("2024-10-30 23:00:30", "%Y-%m-%d %H:%M:%S")
        .expect("valid timestamp");
    let mut ev = off_duty("2024-10-30 23:00", 1.0);
    ev.start_time = start;
    let sheets = segment(&[ev]);

    let crossings = midnight_crossings(&sheets[0]);
    let grid = render(&sheets[0], CanvasSize::default(), &GridStyle::default());

    assert_eq!(crossings.len(), 1);
    assert!(approx(crossings[0].clipped_hours, 30.0 / 3600.0));
    assert!(grid.blocks[0].clipped);
}
