// Workday arithmetic the worker and admin screens lean on: entries against
// project schedules, overtime splits, and the request built from them.

use chrono::{Datelike, NaiveDate};

use jornada::hours::{self, TimeRange};
use jornada::models::{OvertimeRequest, OvertimeStatus, Project, TimeEntry, WeekSchedule};
use jornada::settings::SettingsStore;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
}

fn office_project() -> Project {
    let schedule = WeekSchedule::weekdays(TimeRange::parse("09:00", "17:00").unwrap());
    Project::new("Obra Centro", schedule)
}

#[test]
fn overtime_day_rolls_up_into_a_request() {
    let project = office_project();
    let date = monday();

    let mut entry = TimeEntry::clock_in("u-7", &project.id, date, hours::parse_hhmm("08:00").unwrap());
    entry.clock_out(hours::parse_hhmm("18:00").unwrap());

    let actual = entry.range().unwrap();
    let scheduled = project.schedule.for_weekday(date.weekday()).unwrap();
    let summary = hours::summarize(&actual, Some(scheduled), project.daily_cap_minutes);

    assert_eq!(summary.worked_minutes, 600);
    assert_eq!(summary.delta_label.as_deref(), Some("2h más"));
    assert_eq!(summary.split.normal, 480);
    assert_eq!(summary.split.overtime, 120);

    let request = OvertimeRequest::new(&entry.id, &entry.user_id, summary.split.overtime, None);
    assert_eq!(request.requested_minutes, 120);
    assert_eq!(request.status, OvertimeStatus::Pending);
}

#[test]
fn exact_schedule_match_reads_mismo_tiempo() {
    let project = office_project();
    let date = monday();

    let mut entry = TimeEntry::clock_in("u-7", &project.id, date, hours::parse_hhmm("09:00").unwrap());
    entry.clock_out(hours::parse_hhmm("17:00").unwrap());

    let scheduled = project.schedule.for_weekday(date.weekday()).unwrap();
    let label = hours::compare_ranges(&entry.range().unwrap(), scheduled);
    assert_eq!(label, "Mismo tiempo");
}

#[test]
fn project_cap_override_shifts_the_split() {
    let mut project = office_project();
    project.daily_cap_minutes = Some(420);

    let split = hours::split_normal_and_overtime(500, project.daily_cap_minutes);
    assert_eq!(split.normal, 420);
    assert_eq!(split.overtime, 80);
}

#[test]
fn weekend_has_no_scheduled_minutes() {
    let project = office_project();
    let saturday = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();

    assert_eq!(project.schedule.scheduled_minutes(saturday.weekday()), None);

    // A short Saturday shift still summarizes, just without a delta label.
    let actual = TimeRange::parse("10:00", "13:00").unwrap();
    let summary = hours::summarize(&actual, None, None);
    assert_eq!(summary.worked_minutes, 180);
    assert_eq!(summary.delta_label, None);
    assert_eq!(summary.split.overtime, 0);
}

#[test]
fn open_entry_has_no_worked_minutes_yet() {
    let entry = TimeEntry::clock_in("u-7", "p-1", monday(), hours::parse_hhmm("08:30").unwrap());
    assert_eq!(entry.range(), None);
    assert_eq!(entry.worked_minutes(), None);
}

#[test]
fn overnight_range_is_surfaced_not_fixed() {
    let range = TimeRange::parse("22:00", "06:00").unwrap();
    assert!(range.is_overnight());
    // The signed delta is reported as-is; deciding what it means is on the
    // caller.
    assert_eq!(range.minutes(), -960);
}

#[test]
fn entry_round_trips_through_the_wire_format() {
    let mut entry = TimeEntry::clock_in("u-7", "p-1", monday(), hours::parse_hhmm("08:00").unwrap());
    entry.clock_out(hours::parse_hhmm("16:15").unwrap());
    entry.activity = Some("Encofrado planta 2".into());

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["startTime"], "08:00");
    assert_eq!(json["endTime"], "16:15");
    assert_eq!(json["activity"], "Encofrado planta 2");

    let back: TimeEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back.worked_minutes(), Some(495));
}

#[test]
fn settings_cap_feeds_the_split() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

    let split = hours::split_normal_and_overtime(510, Some(store.hours().daily_cap_minutes));
    assert_eq!(split.normal, 480);
    assert_eq!(split.overtime, 30);
}
