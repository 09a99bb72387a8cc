#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use eldlog::models::{DutyStatus, EventKind, TimelineEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eld() -> Command {
    cargo_bin_cmd!("eldlog")
}

/// Path of a fixture under `demos/`.
pub fn demo(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push(name);
    path.to_string_lossy().to_string()
}

/// Config file path in the temp dir, removed first so defaults apply.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlog.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh (emptied) temp directory.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlog_dir", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write `content` to a temp JSON file and return its path.
pub fn temp_input(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write temp input");
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn driving(start: &str, hours: f64, miles: f64) -> TimelineEvent {
    TimelineEvent::new(EventKind::Driving, ts(start), hours, DutyStatus::Driving).with_distance(miles)
}

pub fn on_duty(kind: EventKind, start: &str, hours: f64) -> TimelineEvent {
    TimelineEvent::new(kind, ts(start), hours, DutyStatus::OnDutyNotDriving)
}

pub fn off_duty(start: &str, hours: f64) -> TimelineEvent {
    TimelineEvent::new(EventKind::Rest, ts(start), hours, DutyStatus::OffDuty)
}

pub fn sleeper(start: &str, hours: f64) -> TimelineEvent {
    TimelineEvent::new(EventKind::Rest, ts(start), hours, DutyStatus::SleeperBerth)
}

/// Driving 4.5h/270mi, fuel 0.5h, driving 1h/60mi on 2024-10-30.
pub fn first_day_events() -> Vec<TimelineEvent> {
    vec![
        driving("2024-10-30 08:00", 4.5, 270.0),
        on_duty(EventKind::Fuel, "2024-10-30 12:30", 0.5).with_location("Fuel Stop 1"),
        driving("2024-10-30 13:00", 1.0, 60.0),
    ]
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
