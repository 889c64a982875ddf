//! Scheduling gate tests
//!
//! Covers the fail-open policy and the interval arithmetic around
//! `last_completion`.

use chrono::{Duration, TimeZone, Utc};
use latest_ratings::modules::scheduler::{
    JsonFileScheduleStore, ScheduleState, UpdateScheduler,
};
use std::fs;
use std::sync::Arc;

fn scheduler(interval_days: u32) -> (UpdateScheduler, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileScheduleStore::new(dir.path().join("state.json")));
    (UpdateScheduler::new(store, interval_days), dir)
}

#[test]
fn empty_state_is_due() {
    let (scheduler, _dir) = scheduler(7);
    let state = ScheduleState::default();

    assert!(state.is_first_run());
    assert!(scheduler.is_due(&state, Utc::now()));
}

#[test]
fn blank_completion_time_is_due() {
    let (scheduler, _dir) = scheduler(7);
    let state = ScheduleState {
        last_completion: Some(String::new()),
    };

    assert!(scheduler.is_due(&state, Utc::now()));
}

#[test]
fn unparseable_completion_time_fails_open() {
    let (scheduler, _dir) = scheduler(7);
    let state = ScheduleState {
        last_completion: Some("last tuesday".to_string()),
    };

    assert!(scheduler.is_due(&state, Utc::now()));
}

#[test]
fn not_due_one_day_before_the_interval() {
    let (scheduler, _dir) = scheduler(7);
    let last = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let state = ScheduleState {
        last_completion: Some(last.to_rfc3339()),
    };

    assert!(!scheduler.is_due(&state, last + Duration::days(6)));
}

#[test]
fn due_exactly_at_the_interval() {
    let (scheduler, _dir) = scheduler(7);
    let last = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let state = ScheduleState {
        last_completion: Some(last.to_rfc3339()),
    };

    assert!(scheduler.is_due(&state, last + Duration::days(7)));
}

#[test]
fn record_completion_persists_and_gates_the_next_cycle() {
    let (scheduler, _dir) = scheduler(7);
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    let mut state = scheduler.load_state();
    scheduler.record_completion(&mut state, now).unwrap();

    let reloaded = scheduler.load_state();
    assert!(!reloaded.is_first_run());
    assert!(!scheduler.is_due(&reloaded, now + Duration::days(6)));
    assert!(scheduler.is_due(&reloaded, now + Duration::days(7)));
}

#[test]
fn corrupt_state_file_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "{not json").unwrap();

    let store = Arc::new(JsonFileScheduleStore::new(path));
    let scheduler = UpdateScheduler::new(store, 7);

    let state = scheduler.load_state();
    assert!(state.is_first_run());
    assert!(scheduler.is_due(&state, Utc::now()));
}
