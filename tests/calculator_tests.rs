use chrono::{NaiveDate, NaiveDateTime};
use teamhours::core::calculator::duration::{worked_hours, worked_minutes};
use teamhours::core::calculator::expected::{expected_monthly_hours, working_days_in_month};
use teamhours::core::calculator::summary::{percentage_of, summarize_month};
use teamhours::core::calculator::weeks::{DayIndex, weeks_of_month};
use teamhours::models::entry::TimeEntry;
use teamhours::models::entry_kind::EntryKind;
use teamhours::models::location::Location;
use teamhours::models::month::MonthRef;
use teamhours::models::settings::UserSettings;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn month(s: &str) -> MonthRef {
    MonthRef::parse(s).unwrap()
}

fn work(start: &str, end: &str) -> TimeEntry {
    TimeEntry::new("ada", dt(start), Location::Office).with_end(dt(end))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_three_hour_morning() {
    let e = work("2025-09-01 09:00", "2025-09-01 12:00");
    assert_eq!(worked_minutes(&e), 180);
    assert!(close(worked_hours(&e), 3.0));
}

#[test]
fn test_pause_is_subtracted_and_result_clamped() {
    let e = work("2025-09-01 09:00", "2025-09-01 17:00").with_pause(30);
    assert!(close(worked_hours(&e), 7.5));

    // inconsistent record straight from storage: pause longer than the span
    let e = work("2025-09-01 09:00", "2025-09-01 10:00").with_pause(300);
    assert_eq!(worked_minutes(&e), 0);
}

#[test]
fn test_duration_only_and_running_entries() {
    let with_duration =
        TimeEntry::new("ada", dt("2025-09-01 08:00"), Location::Remote).with_duration(150);
    assert!(close(worked_hours(&with_duration), 2.5));

    let running = TimeEntry::new("ada", dt("2025-09-01 08:00"), Location::Office);
    assert!(running.is_running());
    assert_eq!(worked_minutes(&running), 0);

    let totals = summarize_month(&[running], &UserSettings::default(), month("2025-09"));
    assert!(close(totals.total_hours_worked, 0.0));
}

#[test]
fn test_weeks_cover_the_month() {
    let weeks = weeks_of_month(month("2025-03"));
    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[0].start, day("2025-02-24"));
    assert_eq!(
        weeks[0].clip_to(month("2025-03")),
        Some((day("2025-03-01"), day("2025-03-02")))
    );
    assert_eq!(weeks[5].start, day("2025-03-31"));
}

#[test]
fn test_days_outside_the_month_contribute_nothing() {
    // 2025-09-29 and 30 share a week with the first days of October
    let entries = vec![
        work("2025-09-29 09:00", "2025-09-29 17:00"),
        work("2025-09-30 09:00", "2025-09-30 17:00"),
        work("2025-10-01 09:00", "2025-10-01 12:00"),
    ];
    let settings = UserSettings::default();

    let october = summarize_month(&entries, &settings, month("2025-10"));
    assert!(close(october.compensated_hours, 3.0));
    assert_eq!(october.weeks[0].from, day("2025-10-01"));

    let september = summarize_month(&entries, &settings, month("2025-09"));
    assert!(close(september.compensated_hours, 16.0));

    let august = summarize_month(&entries, &settings, month("2025-08"));
    assert!(close(august.total_hours_worked, 0.0));
}

#[test]
fn test_driver_time_scales_linearly() {
    let entries = vec![
        work("2025-09-02 08:00", "2025-09-02 12:00").with_driver_hours(2.0),
    ];

    let compensated_at = |percent: f64| {
        let settings = UserSettings {
            driver_compensation_percent: percent,
            ..UserSettings::default()
        };
        summarize_month(&entries, &settings, month("2025-09")).compensated_hours
    };

    assert!(close(compensated_at(0.0), 4.0));
    assert!(close(compensated_at(50.0), 5.0));
    assert!(close(compensated_at(100.0), 6.0));
    assert!(close(compensated_at(150.0), 7.0));
}

#[test]
fn test_passenger_time_is_weighted() {
    let entries = vec![
        TimeEntry::new("ada", dt("2025-09-03 07:00"), Location::Travel)
            .with_duration(0)
            .with_passenger_hours(1.0),
    ];

    let totals = summarize_month(&entries, &UserSettings::default(), month("2025-09"));
    assert!(close(totals.passenger_hours, 1.0));
    assert!(close(totals.compensated_passenger_hours, 0.9));
    assert!(close(totals.total_hours_worked, 0.9));
}

#[test]
fn test_expected_hours_count_weekdays() {
    assert_eq!(working_days_in_month(month("2025-09")), 22);
    assert_eq!(working_days_in_month(month("2024-02")), 21);

    let expected = expected_monthly_hours(&UserSettings::default(), month("2025-09"));
    assert!(close(expected, 154.0));
}

#[test]
fn test_full_month_is_one_hundred_percent() {
    let m = month("2025-09");
    let entries: Vec<TimeEntry> = m
        .days()
        .filter(|d| teamhours::core::calculator::expected::is_working_day(*d))
        .map(|d| TimeEntry::new("ada", d.and_hms_opt(9, 0, 0).unwrap(), Location::Office).with_duration(420))
        .collect();

    let totals = summarize_month(&entries, &UserSettings::default(), m);
    assert!(close(totals.total_hours_worked, totals.expected_hours));
    assert_eq!(totals.percentage, 100.0);
    assert!(close(totals.overtime, 0.0));
}

#[test]
fn test_percentage_with_no_expected_hours() {
    assert_eq!(percentage_of(10.0, 0.0), 0.0);
    assert!(close(percentage_of(77.0, 154.0), 50.0));
}

#[test]
fn test_aggregation_is_idempotent() {
    let entries = vec![
        work("2025-09-01 09:00", "2025-09-01 17:00").with_pause(45),
        work("2025-09-10 13:00", "2025-09-10 18:30").with_driver_hours(1.5),
        TimeEntry::new("ada", dt("2025-09-12 00:00"), Location::Office)
            .with_kind(EntryKind::SickLeave)
            .with_duration(420),
    ];
    let settings = UserSettings::default();

    let first = summarize_month(&entries, &settings, month("2025-09"));
    let second = summarize_month(&entries, &settings, month("2025-09"));
    assert_eq!(first, second);
}

#[test]
fn test_week_rows_add_up_to_the_month() {
    let entries = vec![
        work("2025-09-01 09:00", "2025-09-01 12:00"),
        work("2025-09-09 09:00", "2025-09-09 11:00").with_driver_hours(1.0),
        work("2025-09-30 09:00", "2025-09-30 10:00").with_passenger_hours(2.0),
    ];
    let totals = summarize_month(&entries, &UserSettings::default(), month("2025-09"));

    assert_eq!(totals.weeks.len(), 5);
    let sum: f64 = totals.weeks.iter().map(|w| w.compensated_hours).sum();
    assert!(close(sum, totals.compensated_hours));
    assert!(close(totals.compensated_hours, 7.0));
    assert!(close(totals.weeks[4].passenger_hours, 2.0));
    assert_eq!(totals.weeks[4].to, day("2025-09-30"));
}

#[test]
fn test_day_index_orders_by_start() {
    let entries = vec![
        work("2025-09-01 13:00", "2025-09-01 17:00"),
        work("2025-09-01 08:00", "2025-09-01 12:00"),
    ];
    let index = DayIndex::build(&entries);

    let monday = index.entries_for_day(day("2025-09-01"));
    assert_eq!(monday.len(), 2);
    assert!(monday[0].start_time < monday[1].start_time);
    assert!(index.entries_for_day(day("2025-09-02")).is_empty());
}
