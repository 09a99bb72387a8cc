mod common;
use common::{date, driving, first_day_events, off_duty, on_duty, sleeper};
use eldlog::core::calculator::segmenter::{segment, segment_raw};
use eldlog::errors::AppError;
use eldlog::models::{EventKind, RawTimelineEvent, TimelineEvent};

fn raw(kind: &str, start: &str, duration: f64, status: &str) -> RawTimelineEvent {
    RawTimelineEvent {
        kind: kind.to_string(),
        start_time: start.to_string(),
        duration,
        distance: None,
        location: None,
        status: status.to_string(),
    }
}

#[test]
fn test_empty_timeline_gives_no_sheets() {
    assert!(segment(&[]).is_empty());
}

#[test]
fn test_single_day_is_one_sheet() {
    let events = first_day_events();
    let sheets = segment(&events);

    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].date, date("2024-10-30"));
    assert_eq!(sheets[0].events, events);
}

#[test]
fn test_concatenating_sheets_gives_back_the_timeline() {
    let events = vec![
        driving("2024-10-30 08:00", 4.5, 270.0),
        sleeper("2024-10-30 18:00", 10.0),
        driving("2024-10-31 04:00", 3.0, 180.0),
        on_duty(EventKind::Dropoff, "2024-10-31 07:00", 1.0),
        off_duty("2024-11-02 09:00", 2.0),
    ];

    let sheets = segment(&events);
    let flattened: Vec<TimelineEvent> = sheets.iter().flat_map(|s| s.events.clone()).collect();

    assert_eq!(flattened, events);
    assert!(sheets.iter().all(|s| !s.events.is_empty()));
}

#[test]
fn test_sheet_count_matches_distinct_days_and_skips_gaps() {
    let events = vec![
        driving("2024-10-30 08:00", 1.0, 60.0),
        driving("2024-10-31 08:00", 1.0, 60.0),
        // nothing on Nov 1
        off_duty("2024-11-02 09:00", 2.0),
    ];

    let sheets = segment(&events);
    let dates: Vec<_> = sheets.iter().map(|s| s.date).collect();

    assert_eq!(
        dates,
        vec![date("2024-10-30"), date("2024-10-31"), date("2024-11-02")]
    );
}

#[test]
fn test_consecutive_days_split_at_midnight() {
    let events = vec![
        driving("2024-10-30 22:00", 1.0, 60.0),
        driving("2024-10-31 00:00", 1.0, 60.0),
    ];

    let sheets = segment(&events);

    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].events, vec![events[0].clone()]);
    assert_eq!(sheets[1].events, vec![events[1].clone()]);
}

#[test]
fn test_every_event_is_filed_under_its_start_day() {
    let events = vec![
        driving("2024-10-30 00:00", 1.0, 50.0),
        off_duty("2024-10-30 23:59", 0.5),
        driving("2024-10-31 00:00", 1.0, 50.0),
    ];

    for sheet in segment(&events) {
        assert!(sheet.events.iter().all(|e| e.day() == sheet.date));
    }
}

#[test]
fn test_event_crossing_midnight_stays_on_start_day() {
    let events = vec![
        off_duty("2024-10-30 23:30", 2.0),
        driving("2024-10-31 01:30", 1.0, 55.0),
    ];

    let sheets = segment(&events);

    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].events.len(), 1);
    assert_eq!(sheets[0].events[0].duration_hours, 2.0);
    // the remainder is not carried into the next day
    assert_eq!(sheets[1].events.len(), 1);
    assert_eq!(sheets[1].events[0].kind, EventKind::Driving);
}

#[test]
fn test_segment_raw_rejects_bad_timestamp() {
    let input = vec![
        raw("driving", "2024-10-30T08:00:00", 1.0, "Driving"),
        raw("fuel", "not-a-time", 0.5, "On Duty (Not Driving)"),
    ];

    match segment_raw(&input) {
        Err(AppError::InvalidTimestamp { index, value }) => {
            assert_eq!(index, 1);
            assert_eq!(value, "not-a-time");
        }
        other => panic!("expected InvalidTimestamp, got {other:?}"),
    }
}

#[test]
fn test_segment_raw_valid_input() {
    let input = vec![
        raw("driving", "2024-10-30T08:00:00", 4.5, "Driving"),
        raw("rest", "2024-10-31T06:00:00", 8.0, "Sleeper Berth"),
    ];

    let sheets = segment_raw(&input).expect("valid raw timeline");
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[1].date, date("2024-10-31"));
}
